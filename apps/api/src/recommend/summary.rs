//! Bio normalization: rewrites a raw student bio into a short professional summary.

use tracing::warn;

use crate::llm_client::LlmClient;
use crate::recommend::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};

/// Returns the polished summary, or `raw_text` unchanged if the service fails
/// or answers with nothing.
pub async fn normalize_summary(llm: &LlmClient, raw_text: &str) -> String {
    if raw_text.trim().is_empty() {
        return raw_text.to_string();
    }

    let prompt = build_summary_prompt(raw_text);
    match llm.call_text(&prompt, SUMMARY_SYSTEM).await {
        Ok(summary) if !summary.trim().is_empty() => summary.trim().to_string(),
        Ok(_) => {
            warn!("Summary normalization returned blank text, keeping raw text");
            raw_text.to_string()
        }
        Err(e) => {
            warn!("Summary normalization failed, keeping raw text: {e}");
            raw_text.to_string()
        }
    }
}

fn build_summary_prompt(raw_text: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE.replace("{raw_text}", raw_text)
}
