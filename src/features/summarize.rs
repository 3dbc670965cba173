use std::sync::Arc;

use tracing::info;

use crate::ai::TextGenerator;
use crate::analysis::{classify, scan};
use crate::core::models::SummarizationResponse;
use crate::errors::SummarizerError;
use crate::prompt::{SUMMARY_TEMPERATURE, build_summary_prompt};

/// Produces a gentle summary plus tone and trigger annotations for a piece of
/// user text.
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
}

impl Summarizer {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Tone is scored on the generated summary; triggers are scanned on the
    /// original input, since the summary may soften the wording.
    ///
    /// # Errors
    ///
    /// Returns whatever the generator reports. Nothing is retried.
    pub async fn summarize(&self, text: &str) -> Result<SummarizationResponse, SummarizerError> {
        let prompt = build_summary_prompt(text);

        let fragments = self.generator.generate(&prompt, SUMMARY_TEMPERATURE).await?;
        let generated = fragments.concat();

        let emotional_tone = classify(&generated);
        let trigger_warnings = scan(text);

        info!(
            fragments = fragments.len(),
            tone = ?emotional_tone,
            triggers = %trigger_warnings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
            "Summary generated"
        );

        Ok(SummarizationResponse {
            summary: generated.trim().to_string(),
            emotional_tone,
            trigger_warnings,
        })
    }
}
