/// Sampling temperature used for every summary request
pub const SUMMARY_TEMPERATURE: f32 = 0.7;

const SUMMARY_PROMPT_HEAD: &str = "Provide a deeply compassionate and empathetic summary of the following text.
Your summary should:
- Capture the core emotional essence of the text
- Show understanding and support
- Be gentle and non-judgmental
- Identify potential emotional triggers

Text: ";

const SUMMARY_PROMPT_TAIL: &str = "

Please provide:
1. A concise, empathetic summary
2. The primary emotional tone
3. Any potential trigger warnings";

/// Builds the summarization prompt. The input is inserted verbatim, with no
/// escaping or truncation.
#[must_use]
pub fn build_summary_prompt(text: &str) -> String {
    let mut prompt =
        String::with_capacity(SUMMARY_PROMPT_HEAD.len() + text.len() + SUMMARY_PROMPT_TAIL.len());
    prompt.push_str(SUMMARY_PROMPT_HEAD);
    prompt.push_str(text);
    prompt.push_str(SUMMARY_PROMPT_TAIL);
    prompt
}
