use std::fmt;

/// Three-way direction of the predicted move relative to today's close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_change_pct(change_pct: f64) -> Self {
        if change_pct > 0.0 {
            Trend::Up
        } else if change_pct < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "📈",
            Trend::Down => "📉",
            Trend::Flat => "➡️",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A successful next-close prediction.
///
/// Values are kept at full precision; rounding to two decimals happens only
/// at the display boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub predicted_close: f64,
    pub change_pct: f64,
    pub trend: Trend,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ₹{:.2} ({:+.2}%)",
            self.trend.glyph(),
            self.predicted_close,
            self.change_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_from_sign() {
        assert_eq!(Trend::from_change_pct(1.5), Trend::Up);
        assert_eq!(Trend::from_change_pct(-0.01), Trend::Down);
        assert_eq!(Trend::from_change_pct(0.0), Trend::Flat);
    }

    #[test]
    fn test_display_rounds_to_two_decimals_with_sign() {
        let prediction = Prediction {
            predicted_close: 2800.0,
            change_pct: 1.23654,
            trend: Trend::Up,
        };
        assert_eq!(prediction.to_string(), "📈 ₹2800.00 (+1.24%)");
    }

    #[test]
    fn test_display_flat() {
        let prediction = Prediction {
            predicted_close: 95.0,
            change_pct: 0.0,
            trend: Trend::Flat,
        };
        assert_eq!(prediction.to_string(), "➡️ ₹95.00 (+0.00%)");
    }

    #[test]
    fn test_display_downward() {
        let prediction = Prediction {
            predicted_close: 90.5,
            change_pct: -4.74,
            trend: Trend::Down,
        };
        assert_eq!(prediction.to_string(), "📉 ₹90.50 (-4.74%)");
    }
}
