//! Experience Summaries — turns free-text work experience into a short
//! first-person paragraph.
//!
//! The model sits behind the `Summarizer` trait so the renderer and the HTTP
//! layer never depend on a particular backend. `AppState` holds one
//! `Arc<dyn Summarizer>` built at startup and shared for the process lifetime.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, SummarizerBackend};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::ResumeRecord;

pub mod extractive;
pub mod handlers;
pub mod llm;
pub mod prompts;

pub use extractive::ExtractiveSummarizer;
pub use llm::LlmSummarizer;

/// Generated summaries aim for this many words.
pub const MIN_SUMMARY_WORDS: usize = 30;
pub const MAX_SUMMARY_WORDS: usize = 150;

const FIRST_PERSON_PREFIX: &str = "I worked as ";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("work experience text is empty")]
    EmptyInput,

    #[error("summarizer unavailable: {0}")]
    Backend(String),

    #[error("summarizer returned no usable text")]
    EmptyOutput,
}

impl From<LlmError> for SummaryError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::EmptyContent => SummaryError::EmptyOutput,
            other => SummaryError::Backend(other.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Abstractive (or extractive) summarization capability: `text -> text`.
///
/// Implementations receive input already windowed to the configured size and
/// may return special tokens or stray whitespace; `summarize_experience`
/// cleans the output. Output is not guaranteed to be deterministic.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Short backend name, for logs and responses.
    fn backend(&self) -> &'static str;

    async fn summarize(&self, text: &str) -> Result<String, SummaryError>;
}

/// Builds the configured backend once at startup.
pub fn from_config(config: &Config) -> anyhow::Result<Arc<dyn Summarizer>> {
    let summarizer: Arc<dyn Summarizer> = match config.summarizer_backend {
        SummarizerBackend::Llm => {
            let api_key = config.anthropic_api_key.clone().ok_or_else(|| {
                anyhow::anyhow!(
                    "ANTHROPIC_API_KEY is required for the llm summarizer \
                     (set SUMMARIZER_BACKEND=extractive to run offline)"
                )
            })?;
            let mut client = LlmClient::new(api_key)?;
            if let Some(url) = &config.anthropic_api_url {
                client = client.with_api_url(url.as_str());
            }
            Arc::new(LlmSummarizer::new(client))
        }
        SummarizerBackend::Extractive => {
            warn!(
                "Extractive summarizer selected: summaries are leading input sentences, \
                 not abstractive. Use only for offline development."
            );
            Arc::new(ExtractiveSummarizer)
        }
    };
    info!("Summarizer initialized (backend: {})", summarizer.backend());
    Ok(summarizer)
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ExperienceSummary {
    /// First-person paragraph, ready for the résumé `summary` field.
    pub summary: String,
    /// Cleaned backend output before the first-person rewrite.
    pub raw_summary: String,
}

/// Runs the full summary pipeline:
/// reject empty input → window → summarize → strip special tokens → first person.
pub async fn summarize_experience(
    summarizer: &dyn Summarizer,
    work_experience: &str,
    max_input_words: usize,
) -> Result<ExperienceSummary, SummaryError> {
    if work_experience.trim().is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    let input = window_input(work_experience, max_input_words);
    let generated = summarizer.summarize(&input).await?;

    let raw_summary = strip_special_tokens(&generated);
    if raw_summary.is_empty() {
        return Err(SummaryError::EmptyOutput);
    }

    Ok(ExperienceSummary {
        summary: to_first_person(&raw_summary),
        raw_summary,
    })
}

/// Truncates `text` to its first `max_words` whitespace-separated words.
/// Text that already fits is returned unchanged.
pub fn window_input(text: &str, max_words: usize) -> String {
    let total = text.split_whitespace().count();
    if total <= max_words {
        return text.to_string();
    }
    debug!("Truncating summarizer input from {total} to {max_words} words");
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes model control tokens (`<pad>`, `</s>`, `<unk>`, `<extra_id_0>`,
/// `<|endoftext|>`, ...) and control characters other than newline, then
/// collapses whitespace within each line and drops blank lines.
pub fn strip_special_tokens(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        cleaned.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) if is_special_token(&after[..close]) => {
                cleaned.push(' ');
                rest = &after[close + 1..];
            }
            _ => {
                cleaned.push('<');
                rest = after;
            }
        }
    }
    cleaned.push_str(rest);

    let cleaned: String = cleaned
        .chars()
        .map(|c| if c.is_control() && c != '\n' { ' ' } else { c })
        .collect();

    cleaned
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_special_token(inner: &str) -> bool {
    match inner {
        "pad" | "s" | "/s" | "unk" | "mask" | "eos" | "bos" => true,
        _ => {
            if let Some(n) = inner.strip_prefix("extra_id_") {
                return !n.is_empty() && n.chars().all(|c| c.is_ascii_digit());
            }
            inner.len() >= 2
                && inner.starts_with('|')
                && inner.ends_with('|')
                && !inner.contains(char::is_whitespace)
        }
    }
}

/// Rewrites a summary as a first-person narrative: fragments split on `". "`
/// are rejoined with `". \n"` behind the `"I worked as "` prefix.
pub fn to_first_person(summary: &str) -> String {
    let fragments: Vec<&str> = summary.split(". ").collect();
    format!("{FIRST_PERSON_PREFIX}{}", fragments.join(". \n"))
}

/// Summarizer input derived from a résumé's experiences: one line per entry,
/// `"{job_title} at {company}: {achievements}"`.
pub fn experience_digest(record: &ResumeRecord) -> String {
    record
        .experiences
        .iter()
        .map(|exp| {
            format!(
                "{} at {}: {}",
                exp.job_title.as_deref().unwrap_or_default(),
                exp.company.as_deref().unwrap_or_default(),
                exp.achievements.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
