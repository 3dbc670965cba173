use serde::{Deserialize, Serialize};

use super::count_present;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCategory {
    MentalHealth,
    Violence,
    Grief,
}

impl TriggerCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerCategory::MentalHealth => "mental_health",
            TriggerCategory::Violence => "violence",
            TriggerCategory::Grief => "grief",
        }
    }
}

impl std::fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category table in output order. Extend the taxonomy here.
pub const TRIGGER_TOPICS: &[(TriggerCategory, &[&str])] = &[
    (
        TriggerCategory::MentalHealth,
        &["depression", "anxiety", "suicide", "trauma"],
    ),
    (
        TriggerCategory::Violence,
        &["abuse", "assault", "violence", "harm"],
    ),
    (TriggerCategory::Grief, &["loss", "death", "grief", "mourning"]),
];

/// Returns every category with at least one keyword present in `text`.
/// Each category appears at most once.
#[must_use]
pub fn scan(text: &str) -> Vec<TriggerCategory> {
    let lowered = text.to_lowercase();

    TRIGGER_TOPICS
        .iter()
        .filter(|(_, keywords)| count_present(&lowered, keywords) > 0)
        .map(|(category, _)| *category)
        .collect()
}
