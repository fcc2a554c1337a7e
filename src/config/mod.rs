//! Configuration module for Closecast.
//!
//! The only configuration the core needs is where the two training-pipeline
//! artifacts live, read from environment variables with sensible defaults.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    pub model_path: PathBuf,
    pub scaler_path: PathBuf,
}

impl ArtifactConfig {
    /// Reads `MODEL_PATH` and `SCALER_PATH` from the environment.
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("MODEL_PATH")
            .unwrap_or_else(|_| "data/ml/price_model.json".to_string());
        let scaler_path =
            env::var("SCALER_PATH").unwrap_or_else(|_| "data/ml/scaler.json".to_string());

        Ok(Self {
            model_path: PathBuf::from(model_path),
            scaler_path: PathBuf::from(scaler_path),
        })
    }
}
