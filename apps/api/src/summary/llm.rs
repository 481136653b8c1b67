//! Hosted-model summarizer. All model traffic goes through `LlmClient`.

use async_trait::async_trait;
use tracing::debug;

use crate::llm_client::{LlmClient, LlmError};
use crate::summary::prompts::{SUMMARY_SYSTEM, SUMMARY_TASK_PREFIX};
use crate::summary::{Summarizer, SummaryError, MAX_SUMMARY_WORDS};

/// Abstractive summaries via the hosted model. Output varies between calls.
pub struct LlmSummarizer {
    client: LlmClient,
}

impl LlmSummarizer {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        let prompt = format!("{SUMMARY_TASK_PREFIX}{text}");
        let response = self.client.call(&prompt, SUMMARY_SYSTEM).await?;
        let summary = response.text().ok_or(LlmError::EmptyContent)?;

        debug!(
            "Summary generated: output_tokens={}",
            response.usage.output_tokens
        );
        Ok(cap_words(summary, MAX_SUMMARY_WORDS))
    }
}

/// Keeps at most `max` words; shorter text is returned trimmed but otherwise intact.
fn cap_words(text: &str, max: usize) -> String {
    if text.split_whitespace().count() <= max {
        return text.trim().to_string();
    }
    text.split_whitespace()
        .take(max)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_words_short_text() {
        assert_eq!(cap_words("  led a team.\n", 150), "led a team.");
    }

    #[test]
    fn test_cap_words_long_text() {
        let text = "word ".repeat(200);
        assert_eq!(cap_words(&text, 150).split_whitespace().count(), 150);
    }
}
