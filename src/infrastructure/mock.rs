use crate::application::ml::model::{FeatureScaler, PriceModel};

/// Pass-through scaler for tests and offline runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScaler;

impl FeatureScaler for IdentityScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, String> {
        Ok(features.to_vec())
    }

    fn name(&self) -> &str {
        "Identity scaler"
    }
}

/// Model stub returning the same price regardless of input.
#[derive(Debug, Clone, Copy)]
pub struct FixedPriceModel {
    value: f64,
}

impl FixedPriceModel {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl PriceModel for FixedPriceModel {
    fn predict(&self, _features: &[f64]) -> Result<f64, String> {
        Ok(self.value)
    }

    fn name(&self) -> &str {
        "Fixed price stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Model stub that always fails, for exercising the inference-error path.
#[derive(Debug, Clone)]
pub struct FailingModel {
    reason: String,
}

impl FailingModel {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl PriceModel for FailingModel {
    fn predict(&self, _features: &[f64]) -> Result<f64, String> {
        Err(self.reason.clone())
    }

    fn name(&self) -> &str {
        "Failing stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}
