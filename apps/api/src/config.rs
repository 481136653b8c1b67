use std::str::FromStr;

use anyhow::{bail, Context, Result};

const DEFAULT_MAX_INPUT_WORDS: usize = 512;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub summarizer_backend: SummarizerBackend,
    /// Required only for `SummarizerBackend::Llm`.
    pub anthropic_api_key: Option<String>,
    /// Overrides the Messages API endpoint (proxy or gateway).
    pub anthropic_api_url: Option<String>,
    /// Summarizer input is truncated to this many words.
    pub summary_max_input_words: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizerBackend {
    /// Abstractive summaries from the hosted model. Default.
    Llm,
    /// Leading sentences of the input, offline. Not abstractive; development only.
    Extractive,
}

impl FromStr for SummarizerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extractive" => Ok(SummarizerBackend::Extractive),
            "llm" => Ok(SummarizerBackend::Llm),
            other => bail!("Unknown SUMMARIZER_BACKEND '{other}' (expected 'extractive' or 'llm')"),
        }
    }
}

impl Config {
    /// Backend used when `SUMMARIZER_BACKEND` is unset.
    pub fn default_backend() -> SummarizerBackend {
        SummarizerBackend::Llm
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let summary_max_input_words = match var("SUMMARY_MAX_INPUT_WORDS") {
            Some(v) => v
                .parse::<usize>()
                .context("SUMMARY_MAX_INPUT_WORDS must be a positive integer")?,
            None => DEFAULT_MAX_INPUT_WORDS,
        };
        if summary_max_input_words == 0 {
            bail!("SUMMARY_MAX_INPUT_WORDS must be a positive integer");
        }

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            summarizer_backend: var("SUMMARIZER_BACKEND")
                .as_deref()
                .map_or(Ok(Self::default_backend()), str::parse)?,
            anthropic_api_key: var("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            anthropic_api_url: var("ANTHROPIC_API_URL").filter(|u| !u.trim().is_empty()),
            summary_max_input_words,
        })
    }
}
