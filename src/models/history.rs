use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{common::InputMode, prediction::PredictionResult};

/// One entry of a caller-maintained result log. The crate itself keeps no
/// history; this is the record shape for callers that do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub mode: InputMode,
    /// URL or text snippet identifying the submitted payload.
    pub preview: String,
    pub result: PredictionResult,
    /// Unix milliseconds at which the entry was recorded.
    pub timestamp: i64,
}

impl HistoryItem {
    pub fn new(mode: InputMode, preview: impl Into<String>, result: PredictionResult) -> Self {
        HistoryItem {
            id: Uuid::new_v4().to_string(),
            mode,
            preview: preview.into(),
            result,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
