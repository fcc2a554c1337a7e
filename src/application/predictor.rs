use crate::application::ml::model::{FeatureScaler, PriceModel};
use crate::domain::errors::PredictionError;
use crate::domain::market::MarketSnapshot;
use crate::domain::ml::feature_registry;
use crate::domain::prediction::{Prediction, Trend};
use std::sync::Arc;
use tracing::debug;

/// Stateless prediction service: validates raw inputs, scales them with the
/// fitted transform, runs the regression model, and derives the percent
/// change and trend.
///
/// The scaler and model are loaded once at startup and injected here as
/// immutable shared state; concurrent callers need no locking.
pub struct PricePredictor {
    scaler: Arc<dyn FeatureScaler>,
    model: Arc<dyn PriceModel>,
}

impl PricePredictor {
    pub fn new(scaler: Arc<dyn FeatureScaler>, model: Arc<dyn PriceModel>) -> Self {
        Self { scaler, model }
    }

    /// Predicts the next session's closing price from one session's data.
    ///
    /// Validation failures short-circuit before any scaler/model call.
    /// Anything the scaler or model reports comes back as a single generic
    /// inference failure carrying the underlying message.
    pub fn predict_next_close(
        &self,
        open: Option<f64>,
        high: Option<f64>,
        low: Option<f64>,
        close: Option<f64>,
        volume: Option<f64>,
        vwap: Option<f64>,
    ) -> Result<Prediction, PredictionError> {
        let snapshot = MarketSnapshot::from_inputs(open, high, low, close, volume, vwap)?;

        let features = feature_registry::snapshot_to_vector(&snapshot);
        let scaled = self
            .scaler
            .transform(&features)
            .map_err(|reason| PredictionError::Inference { reason })?;

        if scaled.len() != features.len() {
            return Err(PredictionError::Inference {
                reason: format!(
                    "Scaler returned {} features, expected {}",
                    scaled.len(),
                    features.len()
                ),
            });
        }

        let predicted_close = self
            .model
            .predict(&scaled)
            .map_err(|reason| PredictionError::Inference { reason })?;

        if !predicted_close.is_finite() {
            return Err(PredictionError::Inference {
                reason: format!("Model returned a non-finite price: {predicted_close}"),
            });
        }

        // close > 0 is guaranteed by validation, division is safe
        let change_pct = (predicted_close - snapshot.close) / snapshot.close * 100.0;
        let trend = Trend::from_change_pct(change_pct);

        debug!(
            "Prediction via {} {}: close={} predicted={} change={:.4}%",
            self.model.name(),
            self.model.version(),
            snapshot.close,
            predicted_close,
            change_pct
        );

        Ok(Prediction {
            predicted_close,
            change_pct,
            trend,
        })
    }

    /// Presentation-facing entry point: same operation, rendered as one
    /// short display string so the caller never handles errors itself.
    pub fn predict_display(
        &self,
        open: Option<f64>,
        high: Option<f64>,
        low: Option<f64>,
        close: Option<f64>,
        volume: Option<f64>,
        vwap: Option<f64>,
    ) -> String {
        match self.predict_next_close(open, high, low, close, volume, vwap) {
            Ok(prediction) => prediction.to_string(),
            Err(e) => format!("❌ {e}"),
        }
    }
}
