/// Escapes text for interpolation into HTML element content or a quoted
/// attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup() {
        assert_eq!(
            escape_html("</script><img src=x onerror='alert(1)'>"),
            "&lt;/script&gt;&lt;img src=x onerror=&#x27;alert(1)&#x27;&gt;"
        );
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(escape_html("R&D &amp;"), "R&amp;D &amp;amp;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("Zürich, 2021 - 2023"), "Zürich, 2021 - 2023");
    }
}
