use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The content of one prediction request. Exactly one variant exists per
/// request; the text variant goes out as the `text` form field, the file
/// variant as the binary `file` field.
#[derive(Debug, Clone)]
pub enum PredictionPayload {
    Text(String),
    File {
        data: Vec<u8>,
        filename: String,
        mime_type: Option<String>,
    },
}

impl PredictionPayload {
    pub fn text(text: impl Into<String>) -> Self {
        PredictionPayload::Text(text.into())
    }

    pub fn file(data: Vec<u8>, filename: impl Into<String>) -> Self {
        PredictionPayload::File {
            data,
            filename: filename.into(),
            mime_type: None,
        }
    }

    pub fn file_with_mime(
        data: Vec<u8>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        PredictionPayload::File {
            data,
            filename: filename.into(),
            mime_type: Some(mime_type.into()),
        }
    }
}

/// Normalized outcome of one completed request. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: String,
    pub confidence: f64,
    /// Unvalidated passthrough of the full response JSON. Anything the
    /// backend returned beyond `label`/`confidence` lives here.
    pub data: Value,
    pub processing_time_ms: u64,
    pub timestamp: String,
}

impl PredictionResult {
    /// Normalizes a parsed response body. A missing `label` becomes
    /// "Completed", a missing `confidence` becomes 0.
    pub fn from_json(data: Value, processing_time_ms: u64) -> Self {
        let label = data
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or("Completed")
            .to_string();
        let confidence = data
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        PredictionResult {
            label,
            confidence,
            data,
            processing_time_ms,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Response of the backend's `/health` probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn test_from_json_with_fields() {
        let result = PredictionResult::from_json(json!({"label": "happy", "confidence": 0.92}), 12);
        assert_eq!(result.label, "happy");
        assert_eq!(result.confidence, 0.92);
        assert_eq!(result.data["label"], "happy");
        assert_eq!(result.data["confidence"], 0.92);
        assert_eq!(result.processing_time_ms, 12);
        assert!(DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
    }

    #[test]
    fn test_from_json_defaults() {
        let result = PredictionResult::from_json(json!({}), 0);
        assert_eq!(result.label, "Completed");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let result =
            PredictionResult::from_json(json!({"label": "sad", "frames_analyzed": 48}), 3);
        assert_eq!(result.data["frames_analyzed"], 48);
    }
}
