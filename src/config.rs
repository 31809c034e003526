use std::env;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";
pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MODEL: &str = "default";

/// Immutable configuration for one prediction request. Supplied by the
/// caller per request; nothing is persisted between calls.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub endpoint_url: String,
    pub threshold: f64,
    pub model_name: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            threshold: DEFAULT_THRESHOLD,
            model_name: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let endpoint_url =
            env::var("PREDICT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let threshold = env::var("PREDICT_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_THRESHOLD);
        let model_name = env::var("PREDICT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        ModelConfig {
            endpoint_url,
            threshold,
            model_name,
        }
    }

    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }
}
