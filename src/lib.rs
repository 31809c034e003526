//! rpredict is a client library for ML prediction endpoints that accept
//! `multipart/form-data` uploads. Every request carries three metadata
//! fields (`mode`, `threshold`, `model_name`) plus exactly one content
//! field: `text` for text payloads, `file` for binary payloads.

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;

pub use client::PredictionClient;
pub use config::{ModelConfig, DEFAULT_ENDPOINT};
pub use error::{PredictError, Result};
pub use models::*;
