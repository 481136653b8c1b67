//! Local, deterministic summarizer for offline development. Needs no model and
//! no network. It selects leading sentences and does not rewrite them, so it is
//! never the default; `SUMMARIZER_BACKEND=extractive` opts in.
//!
//! Algorithm:
//! 1. Split the input into sentences at `.`, `!`, `?` (followed by whitespace)
//!    and at line breaks.
//! 2. Keep leading sentences until at least `MIN_SUMMARY_WORDS` words are collected.
//! 3. Cap the result at `MAX_SUMMARY_WORDS` words.
//! 4. Join sentences with `". "` so the first-person rewrite can split them again.

use async_trait::async_trait;

use crate::summary::{Summarizer, SummaryError, MAX_SUMMARY_WORDS, MIN_SUMMARY_WORDS};

pub struct ExtractiveSummarizer;

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    fn backend(&self) -> &'static str {
        "extractive"
    }

    async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        Ok(extract_summary(text))
    }
}

fn extract_summary(text: &str) -> String {
    let mut kept: Vec<String> = Vec::new();
    let mut words = 0;

    for sentence in split_sentences(text) {
        if words >= MIN_SUMMARY_WORDS {
            break;
        }
        let sentence_words: Vec<&str> = sentence.split_whitespace().collect();
        let room = MAX_SUMMARY_WORDS - words;
        let take = sentence_words.len().min(room);
        kept.push(sentence_words[..take].join(" "));
        words += take;
        if words >= MAX_SUMMARY_WORDS {
            break;
        }
    }

    if kept.is_empty() {
        return String::new();
    }
    format!("{}.", kept.join(". "))
}

/// Sentences without their terminal punctuation, empty fragments dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let boundary = match c {
            '\n' => true,
            '.' | '!' | '?' => chars.peek().map_or(true, |&(_, next)| next.is_whitespace()),
            _ => false,
        };
        if boundary {
            sentences.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(|s| s.trim().trim_end_matches(&['.', '!', '?'][..]).trim())
        .filter(|s| !s.is_empty())
        .collect()
}
