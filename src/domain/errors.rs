use thiserror::Error;

/// Errors a prediction request can fail with.
///
/// Input problems are deterministic and never retried; anything the scaler
/// or model reports is collapsed into a single generic inference failure,
/// since the capability interface cannot distinguish finer kinds.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictionError {
    #[error("Please enter valid positive values for all fields")]
    MissingOrNonPositive,

    #[error("Invalid price data: High should be ≥ max(Open, Close) and Low should be ≤ min(Open, Close)")]
    OhlcBoundsViolated,

    #[error("Error in prediction: {reason}")]
    Inference { reason: String },
}

impl PredictionError {
    /// True for failures caused by the caller's inputs rather than the
    /// scaler/model pipeline.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PredictionError::MissingOrNonPositive | PredictionError::OhlcBoundsViolated
        )
    }
}
