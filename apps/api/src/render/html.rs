//! Résumé HTML renderer.
//!
//! Produces a self-contained HTML5 document with an inline style sheet. The
//! header and all eight content sections are always emitted, in a fixed
//! order, even when their data is empty. Every interpolated value passes
//! through [`escape_html`].
//!
//! Fallbacks are deliberately asymmetric: `skills` renders an empty string
//! when empty, while `certifications`, `languages` and `hobbies` render
//! `N/A`. Callers depend on that output.

use std::fmt::Write;

use serde::Serialize;
use serde_json::Value;

use crate::models::resume::{
    EducationEntry, ExperienceEntry, FieldWarning, ProjectEntry, ResumeRecord,
};
use crate::render::escape::escape_html;
use crate::render::record::record_from_value;

pub const FALLBACK: &str = "N/A";

/// Section headings in render order.
pub const SECTION_TITLES: [&str; 8] = [
    "Professional Summary",
    "Work Experience",
    "Education",
    "Skills",
    "Certifications",
    "Projects",
    "Languages",
    "Hobbies and Interests",
];

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
        .container { max-width: 800px; margin: 0 auto; padding: 20px; }
        h1 { text-align: center; font-size: 36px; margin-bottom: 10px; color: #000; }
        .contact-info { text-align: center; margin-bottom: 20px; }
        .section { margin-bottom: 20px; }
        .section h2 { font-size: 20px; color: #000; border-bottom: 2px solid #000; padding-bottom: 5px; margin-bottom: 10px; font-weight: bold; }
        .experience, .education, .project { margin-bottom: 15px; }
        .experience h3, .education h3, .project h3 { margin: 0; font-size: 18px; }
        .experience p, .education p, .project p { margin: 5px 0; }
        .skills, .certifications, .languages, .hobbies { margin-bottom: 10px; }
        ul { padding-left: 20px; }
"#;

/// Rendered document plus the diagnostics collected while reading the input.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedResume {
    pub html: String,
    pub warnings: Vec<FieldWarning>,
}

/// Reads an untyped payload leniently and renders it. Never fails.
pub fn render_value(value: &Value) -> RenderedResume {
    let (record, warnings) = record_from_value(value);
    RenderedResume {
        html: render_resume(&record),
        warnings,
    }
}

/// Renders a résumé as a complete HTML document. Pure and deterministic.
pub fn render_resume(record: &ResumeRecord) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(html, "    <title>Resume - {}</title>", text(&record.name));
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");

    push_header(&mut html, record);

    let [summary, experience, education, skills, certifications, projects, languages, hobbies] =
        SECTION_TITLES;

    open_section(&mut html, summary);
    let _ = writeln!(html, "            <p>{}</p>", text(&record.summary));
    close_section(&mut html);

    open_section(&mut html, experience);
    for entry in &record.experiences {
        push_experience(&mut html, entry);
    }
    close_section(&mut html);

    open_section(&mut html, education);
    for entry in &record.education {
        push_education(&mut html, entry);
    }
    close_section(&mut html);

    open_section(&mut html, skills);
    let _ = writeln!(html, "            <p>{}</p>", joined(&record.skills));
    close_section(&mut html);

    open_section(&mut html, certifications);
    let _ = writeln!(html, "            <p>{}</p>", joined_or_na(&record.certifications));
    close_section(&mut html);

    open_section(&mut html, projects);
    for entry in &record.projects {
        push_project(&mut html, entry);
    }
    close_section(&mut html);

    open_section(&mut html, languages);
    let _ = writeln!(html, "            <p>{}</p>", joined_or_na(&record.languages));
    close_section(&mut html);

    open_section(&mut html, hobbies);
    let _ = writeln!(html, "            <p>{}</p>", joined_or_na(&record.hobbies));
    close_section(&mut html);

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

fn push_header(html: &mut String, record: &ResumeRecord) {
    let _ = writeln!(html, "        <h1>{}</h1>", text(&record.name));
    html.push_str("        <div class=\"contact-info\">\n");
    let contact = [
        format!("<span>Phone: {}</span>", text(&record.phone)),
        format!("<span>Email: {}</span>", text(&record.email)),
        format!("<span>LinkedIn: {}</span>", text_or_na(&record.linkedin)),
        format!("<span>Portfolio: {}</span>", text_or_na(&record.portfolio)),
        format!("<span>Address: {}</span>", text_or_na(&record.address)),
    ];
    let _ = writeln!(html, "            {}", contact.join(" | "));
    html.push_str("        </div>\n");
}

fn push_experience(html: &mut String, entry: &ExperienceEntry) {
    let heading = [
        text(&entry.job_title),
        text(&entry.company),
        text(&entry.location),
        format!("{} - {}", text(&entry.start_date), text(&entry.end_date)),
    ]
    .join(" | ");

    let items: String = entry
        .achievements
        .iter()
        .map(|a| format!("<li>{}</li>", escape_html(a)))
        .collect();

    html.push_str("            <div class=\"experience\">\n");
    let _ = writeln!(html, "                <h3>{heading}</h3>");
    let _ = writeln!(html, "                <ul>{items}</ul>");
    html.push_str("            </div>\n");
}

fn push_education(html: &mut String, entry: &EducationEntry) {
    let details = [
        text(&entry.institution),
        text(&entry.location),
        format!("Graduated: {}", text(&entry.graduation_date)),
    ]
    .join(" | ");

    html.push_str("            <div class=\"education\">\n");
    let _ = writeln!(html, "                <h3>{}</h3>", text(&entry.degree));
    let _ = writeln!(html, "                <p>{details}</p>");
    let _ = writeln!(
        html,
        "                <p>Honors/Awards: {}</p>",
        text_or_na(&entry.honors)
    );
    html.push_str("            </div>\n");
}

fn push_project(html: &mut String, entry: &ProjectEntry) {
    html.push_str("            <div class=\"project\">\n");
    let _ = writeln!(html, "                <h3>{}</h3>", text(&entry.title));
    let _ = writeln!(
        html,
        "                <p><strong>Description:</strong> {}</p>",
        text(&entry.description)
    );
    let _ = writeln!(
        html,
        "                <p><strong>Technologies:</strong> {}</p>",
        text(&entry.technologies)
    );
    let _ = writeln!(
        html,
        "                <p><strong>Role:</strong> {}</p>",
        text(&entry.role)
    );
    html.push_str("            </div>\n");
}

fn open_section(html: &mut String, title: &str) {
    html.push_str("        <div class=\"section\">\n");
    let _ = writeln!(html, "            <h2>{title}</h2>");
}

fn close_section(html: &mut String) {
    html.push_str("        </div>\n");
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(escape_html).unwrap_or_default()
}

fn text_or_na(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| FALLBACK.to_string())
}

fn joined(items: &[String]) -> String {
    items
        .iter()
        .map(|s| escape_html(s))
        .collect::<Vec<_>>()
        .join(", ")
}

fn joined_or_na(items: &[String]) -> String {
    if items.is_empty() {
        FALLBACK.to_string()
    } else {
        joined(items)
    }
}
