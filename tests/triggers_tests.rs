use gentle_summarizer::analysis::{TriggerCategory, scan};

#[test]
fn test_detects_matching_categories_only() {
    let warnings = scan("There was abuse and grief in that house");

    assert_eq!(
        warnings,
        vec![TriggerCategory::Violence, TriggerCategory::Grief]
    );
    assert!(!warnings.contains(&TriggerCategory::MentalHealth));
}

#[test]
fn test_no_matches_yields_empty_list() {
    let warnings = scan("We went to the beach and built a sandcastle");
    assert!(warnings.is_empty());

    let json = serde_json::to_string(&warnings).unwrap();
    assert_eq!(json, "[]");
}

#[test]
fn test_category_reported_once() {
    // Several keywords from each category
    let warnings = scan("Depression, anxiety and trauma; death, loss and mourning");

    assert_eq!(
        warnings,
        vec![TriggerCategory::MentalHealth, TriggerCategory::Grief]
    );
}

#[test]
fn test_case_insensitive() {
    assert_eq!(scan("ASSAULT"), vec![TriggerCategory::Violence]);
    assert_eq!(scan("Suicide"), scan("suicide"));
}

#[test]
fn test_scan_is_idempotent() {
    let text = "Years of anxiety after the assault";
    assert_eq!(scan(text), scan(text));
}

#[test]
fn test_serializes_category_names() {
    let json = serde_json::to_string(&scan("depression, harm, grief")).unwrap();
    assert_eq!(json, r#"["mental_health","violence","grief"]"#);
}
