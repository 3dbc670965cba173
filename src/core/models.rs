use serde::{Deserialize, Serialize};

use crate::analysis::{EmotionalTone, TriggerCategory};

#[derive(Debug, Deserialize)]
pub struct SummarizationRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationResponse {
    pub summary: String,
    pub emotional_tone: EmotionalTone,
    pub trigger_warnings: Vec<TriggerCategory>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Body returned for both client and server failures. `summary` carries a
/// supportive placeholder instead of the error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub summary: String,
}
