// Prompt constants for the hosted summary backend.

/// System prompt for experience summaries — plain text only.
pub const SUMMARY_SYSTEM: &str = "You summarize professional work experience for a resume. \
    Respond with a single plain-text paragraph of 30 to 150 words. \
    Describe the roles held and the concrete outcomes achieved. \
    Do NOT use markdown, bullet points, headings, or quotation marks. \
    Do NOT invent employers, titles, dates, or metrics not present in the input.";

/// Input prefix for the summarization task. Prepended to the windowed text.
pub const SUMMARY_TASK_PREFIX: &str = "summarize: ";
