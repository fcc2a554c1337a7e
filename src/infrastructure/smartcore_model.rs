use crate::application::ml::model::PriceModel;
use anyhow::{Context, Result};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Regression model fitted offline and serialized with serde_json by the
/// training pipeline.
pub struct SmartCoreModel {
    model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartCoreModel {
    /// Loads the model artifact. Missing or malformed artifacts fail the
    /// startup load rather than degrading silently.
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Failed to open model file {path:?}"))?;
        let model = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize model from {path:?}"))?;

        info!("Loaded price model from {:?}", path);
        Ok(Self { model })
    }
}

impl PriceModel for SmartCoreModel {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {e}"))?;

        let predictions = self
            .model
            .predict(&input_matrix)
            .map_err(|e| format!("Prediction failed: {e}"))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| "No prediction returned".to_string())
    }

    fn name(&self) -> &str {
        "SmartCore Linear Regression"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
