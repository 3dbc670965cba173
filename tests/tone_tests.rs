use gentle_summarizer::analysis::{EmotionalTone, classify};

#[test]
fn test_positive_when_more_positive_keywords() {
    assert_eq!(
        classify("I feel hope, support, and care"),
        EmotionalTone::Positive
    );
}

#[test]
fn test_negative_when_more_negative_keywords() {
    assert_eq!(
        classify("It was a difficult struggle and it still hurts"),
        EmotionalTone::Negative
    );
}

#[test]
fn test_ties_are_neutral() {
    assert_eq!(classify("I feel hope and pain"), EmotionalTone::Neutral);
    assert_eq!(classify("A quiet afternoon walk"), EmotionalTone::Neutral);
    assert_eq!(classify(""), EmotionalTone::Neutral);
}

#[test]
fn test_case_insensitive() {
    let samples = [
        "HOPE and LOVE through the PAIN",
        "So Much Trauma, So Much Hurt",
        "Understanding and Compassion",
    ];

    for s in samples {
        assert_eq!(classify(s), classify(&s.to_lowercase()), "input: {s}");
    }
    assert_eq!(classify("HOPE"), EmotionalTone::Positive);
}

#[test]
fn test_classify_is_idempotent() {
    let text = "Through the pain there was love and understanding";
    assert_eq!(classify(text), classify(text));
}
