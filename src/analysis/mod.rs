//! Keyword heuristics applied after generation.
//!
//! Both checks are plain case-insensitive substring containment over static
//! keyword tables. There is no tokenization, so a keyword also matches inside
//! a longer word ("harmony" contains "harm").

pub mod tone;
pub mod triggers;

pub use tone::{EmotionalTone, classify};
pub use triggers::{TriggerCategory, scan};

/// Number of keywords in `keywords` that occur at least once in `haystack`.
///
/// `haystack` is expected to be lowercased already.
pub(crate) fn count_present(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| haystack.contains(*k)).count()
}
