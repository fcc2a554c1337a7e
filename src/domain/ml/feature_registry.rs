use crate::domain::market::MarketSnapshot;

/// Ordered list of feature names.
/// This order MUST match exactly with the column order the scaler and model
/// were fitted with offline. Any change here is a breaking change for the
/// artifacts: neither can detect a transposed ordering, predictions would
/// silently be wrong.
pub const FEATURE_NAMES: &[&str] = &["Open", "High", "Low", "Close", "Volume", "VWAP"];

/// Converts a validated snapshot into the model's input vector, in the
/// registry's fixed column order.
pub fn snapshot_to_vector(snapshot: &MarketSnapshot) -> Vec<f64> {
    vec![
        snapshot.open,
        snapshot.high,
        snapshot.low,
        snapshot.close,
        snapshot.volume,
        snapshot.vwap,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_length() {
        let snapshot = MarketSnapshot::from_inputs(
            Some(100.0),
            Some(110.0),
            Some(90.0),
            Some(105.0),
            Some(1000.0),
            Some(102.0),
        )
        .unwrap();
        assert_eq!(snapshot_to_vector(&snapshot).len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_order_is_pinned() {
        assert_eq!(
            FEATURE_NAMES,
            &["Open", "High", "Low", "Close", "Volume", "VWAP"]
        );

        let snapshot = MarketSnapshot::from_inputs(
            Some(1.0),
            Some(2.0),
            Some(0.5),
            Some(1.5),
            Some(3.0),
            Some(4.0),
        )
        .unwrap();
        // Open is index 0, VWAP is last index (5)
        let vec = snapshot_to_vector(&snapshot);
        assert_eq!(vec, vec![1.0, 2.0, 0.5, 1.5, 3.0, 4.0]);
    }
}
