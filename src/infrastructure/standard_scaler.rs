use crate::application::ml::model::FeatureScaler;
use crate::domain::ml::feature_registry::FEATURE_NAMES;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// On-disk form of the fitted scaler: per-column mean and standard
/// deviation, in feature-registry order.
#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    mean: Vec<f64>,
    std: Vec<f64>,
}

/// Standardization scaler fitted offline: `(x - mean) / std` per column.
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Loads the scaler artifact produced by the training pipeline.
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Failed to open scaler file {path:?}"))?;
        let artifact: ScalerArtifact = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize scaler from {path:?}"))?;

        let scaler = Self::from_parameters(artifact.mean, artifact.std)?;
        info!("Loaded feature scaler from {:?}", path);
        Ok(scaler)
    }

    pub fn from_parameters(mean: Vec<f64>, std: Vec<f64>) -> Result<Self> {
        ensure!(
            mean.len() == FEATURE_NAMES.len(),
            "Scaler has {} columns, feature registry expects {}",
            mean.len(),
            FEATURE_NAMES.len()
        );
        ensure!(
            std.len() == mean.len(),
            "Scaler mean/std lengths differ: {} vs {}",
            mean.len(),
            std.len()
        );
        ensure!(
            std.iter().all(|s| s.is_finite() && *s > 0.0),
            "Scaler std must be finite and positive in every column"
        );

        Ok(Self { mean, std })
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, String> {
        if features.len() != self.mean.len() {
            return Err(format!(
                "Expected {} features, got {}",
                self.mean.len(),
                features.len()
            ));
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.std.iter()))
            .map(|(x, (mean, std))| (x - mean) / std)
            .collect())
    }

    fn name(&self) -> &str {
        "Standard scaler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_standardizes_each_column() {
        let scaler = StandardScaler::from_parameters(
            vec![100.0, 110.0, 90.0, 100.0, 1000.0, 100.0],
            vec![10.0, 10.0, 10.0, 10.0, 100.0, 10.0],
        )
        .unwrap();

        let scaled = scaler
            .transform(&[110.0, 120.0, 100.0, 105.0, 1200.0, 95.0])
            .unwrap();
        assert_eq!(scaled, vec![1.0, 1.0, 1.0, 0.5, 2.0, -0.5]);
    }

    #[test]
    fn test_arity_mismatch_is_an_error() {
        let scaler = StandardScaler::from_parameters(
            vec![0.0; 6],
            vec![1.0; 6],
        )
        .unwrap();
        let result = scaler.transform(&[1.0, 2.0, 3.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_std_artifact_rejected() {
        let result = StandardScaler::from_parameters(vec![0.0; 6], vec![1.0, 1.0, 0.0, 1.0, 1.0, 1.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_arity_artifact_rejected() {
        let result = StandardScaler::from_parameters(vec![0.0; 5], vec![1.0; 5]);
        assert!(result.is_err());
    }
}
