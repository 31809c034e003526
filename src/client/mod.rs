use std::time::Instant;

use reqwest::multipart::{Form, Part};

use crate::{
    config::ModelConfig,
    error::{PredictError, Result},
    models::{HealthStatus, InputMode, PredictionPayload, PredictionResult},
};

/// Client for multipart prediction endpoints.
///
/// Every request POSTs a `multipart/form-data` body with three metadata
/// fields (`mode`, `threshold`, `model_name`) and exactly one content field:
/// `text` when the payload is text, `file` otherwise. Each call is a
/// one-shot sequence with no retries and no cross-call state; the
/// per-request `ModelConfig` decides where it goes.
#[derive(Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
}

impl PredictionClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Assembles the multipart body for one request. Pure data shaping:
    /// no validation of payload shape, size, or encoding happens here, the
    /// endpoint owns any format rejection.
    pub fn build_form(mode: InputMode, payload: PredictionPayload, config: &ModelConfig) -> Form {
        let form = Form::new()
            .text("mode", mode.as_str())
            .text("threshold", config.threshold.to_string())
            .text("model_name", config.model_name.clone());

        match payload {
            PredictionPayload::Text(text) => form.text("text", text),
            PredictionPayload::File {
                data,
                filename,
                mime_type,
            } => {
                let part = match mime_type {
                    Some(mime) => Part::bytes(data.clone())
                        .file_name(filename.clone())
                        .mime_str(&mime)
                        // An unparseable MIME string falls back to an
                        // untagged part rather than failing assembly.
                        .unwrap_or_else(|_| Part::bytes(data).file_name(filename)),
                    None => Part::bytes(data).file_name(filename),
                };
                form.part("file", part)
            }
        }
    }

    /// Sends one prediction request and normalizes the outcome.
    ///
    /// Timing covers the whole round trip including response parsing. A
    /// non-success status becomes `PredictError::Api` carrying the body
    /// text (or the status reason phrase when the body is empty); transport
    /// failures propagate unchanged inside `PredictError::Transport`.
    pub async fn predict(
        &self,
        mode: InputMode,
        payload: PredictionPayload,
        config: &ModelConfig,
    ) -> Result<PredictionResult> {
        let started = Instant::now();
        let form = Self::build_form(mode, payload, config);

        log::debug!("Sending {} prediction to {}", mode, config.endpoint_url);

        let response = self
            .http
            .post(&config.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                log::error!("Prediction request failed: {}", e);
                PredictError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown Error").to_string()
            } else {
                body
            };
            log::warn!("Endpoint rejected request: API Error {}: {}", status.as_u16(), message);
            return Err(PredictError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: serde_json::Value = response.json().await?;
        let elapsed_ms = (started.elapsed().as_secs_f64() * 1000.0).round() as u64;

        log::info!("{} prediction completed in {}ms", mode, elapsed_ms);
        Ok(PredictionResult::from_json(data, elapsed_ms))
    }

    /// Probes the endpoint's `/health` route, derived from the configured
    /// prediction URL by replacing its final path segment.
    pub async fn health_check(&self, config: &ModelConfig) -> Result<bool> {
        let url = health_url(&config.endpoint_url);
        let response = self.http.get(&url).send().await.map_err(|e| {
            log::error!("Health check failed: {}", e);
            PredictError::Transport(e)
        })?;

        let healthy = response.status().is_success();
        if healthy {
            if let Ok(health) = response.json::<HealthStatus>().await {
                log::debug!("Endpoint health: {}", health.status);
            }
        }

        Ok(healthy)
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

fn health_url(endpoint_url: &str) -> String {
    match endpoint_url.rsplit_once('/') {
        // Guard against splitting inside the scheme's "//" when the URL has
        // no path at all.
        Some((base, _)) if !base.is_empty() && !base.ends_with('/') && !base.ends_with(':') => {
            format!("{}/health", base)
        }
        _ => format!("{}/health", endpoint_url.trim_end_matches('/')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_url_replaces_last_segment() {
        assert_eq!(
            health_url("http://localhost:8000/predict"),
            "http://localhost:8000/health"
        );
        assert_eq!(
            health_url("https://api.example.com/v1/emotion/predict"),
            "https://api.example.com/v1/emotion/health"
        );
    }

    #[test]
    fn test_health_url_without_path() {
        assert_eq!(
            health_url("http://localhost:8000"),
            "http://localhost:8000/health"
        );
        assert_eq!(
            health_url("http://localhost:8000/"),
            "http://localhost:8000/health"
        );
    }
}
