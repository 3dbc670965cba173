use serde::{Deserialize, Serialize};

use super::count_present;

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "hope",
    "support",
    "care",
    "love",
    "understanding",
    "compassion",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &["pain", "struggle", "difficult", "sad", "hurt", "trauma"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    Positive,
    Negative,
    Neutral,
}

/// Classifies text by comparing how many positive and negative keywords it
/// contains. Each keyword counts once no matter how often it repeats; ties
/// are neutral.
#[must_use]
pub fn classify(text: &str) -> EmotionalTone {
    let lowered = text.to_lowercase();

    let positive = count_present(&lowered, POSITIVE_KEYWORDS);
    let negative = count_present(&lowered, NEGATIVE_KEYWORDS);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => EmotionalTone::Positive,
        std::cmp::Ordering::Less => EmotionalTone::Negative,
        std::cmp::Ordering::Equal => EmotionalTone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keyword_counts_once() {
        // "pain" three times still loses to two distinct positive keywords
        assert_eq!(
            classify("pain, pain and more pain, but hope and love"),
            EmotionalTone::Positive
        );
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EmotionalTone::Negative).unwrap(),
            "\"negative\""
        );
    }
}
