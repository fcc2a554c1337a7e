use crate::domain::errors::PredictionError;

/// One trading session's worth of market data, validated and ready for
/// inference.
///
/// A snapshot only exists if all six fields are finite, strictly positive,
/// and the High/Low bounds hold: `high >= max(open, close)` and
/// `low <= min(open, close)`. It is built fresh per prediction request and
/// discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub vwap: f64,
}

impl MarketSnapshot {
    /// Validates six raw inputs into a snapshot.
    ///
    /// Checks run in order and the first failure short-circuits: presence,
    /// then positivity (non-finite values count as invalid), then OHLC
    /// consistency.
    pub fn from_inputs(
        open: Option<f64>,
        high: Option<f64>,
        low: Option<f64>,
        close: Option<f64>,
        volume: Option<f64>,
        vwap: Option<f64>,
    ) -> Result<Self, PredictionError> {
        let (open, high, low, close, volume, vwap) = match (open, high, low, close, volume, vwap) {
            (Some(o), Some(h), Some(l), Some(c), Some(v), Some(w)) => (o, h, l, c, v, w),
            _ => return Err(PredictionError::MissingOrNonPositive),
        };

        if [open, high, low, close, volume, vwap]
            .iter()
            .any(|v| !v.is_finite() || *v <= 0.0)
        {
            return Err(PredictionError::MissingOrNonPositive);
        }

        // High/Low must bound Open and Close by definition of a session.
        // The model was never trained on vectors violating this, so reject
        // outright instead of clamping.
        if high < open.max(close) || low > open.min(close) {
            return Err(PredictionError::OhlcBoundsViolated);
        }

        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
            vwap,
        })
    }
}
