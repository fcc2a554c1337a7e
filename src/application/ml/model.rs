/// Interface for the pre-fitted feature transform applied before inference.
///
/// Implementations must preserve arity: six features in, six out, matching
/// the preprocessing used at training time.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, String>;

    /// Get scaler name/type
    fn name(&self) -> &str;
}

/// Interface for the pre-trained regression model.
///
/// Takes a scaled feature vector and returns the predicted next-period
/// closing price.
pub trait PriceModel: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
