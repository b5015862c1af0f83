use crate::constant::{Const, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureResult {
    pub direction: Direction,
    pub confidence: u8,
}

/// Classifies short-term structure from the last ten closes. Rules are
/// evaluated in strict priority order, first match wins:
/// break above the prior window high, break below the prior window
/// low, above/below the close three bars back, otherwise neutral.
pub fn market_structure(closes: &[f64]) -> StructureResult {
    let window_start = closes.len().saturating_sub(Const::STRUCTURE_WINDOW);
    let window = &closes[window_start..];
    let Some((&last, prior)) = window.split_last() else {
        return StructureResult {
            direction: Direction::Neutral,
            confidence: 40,
        };
    };

    if !prior.is_empty() {
        let prior_max = prior.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let prior_min = prior.iter().cloned().fold(f64::INFINITY, f64::min);
        if last > prior_max {
            return StructureResult {
                direction: Direction::Bullish,
                confidence: 100,
            };
        }
        if last < prior_min {
            return StructureResult {
                direction: Direction::Bearish,
                confidence: 100,
            };
        }
    }

    if window.len() >= 3 {
        let three_back = window[window.len() - 3];
        if last > three_back {
            return StructureResult {
                direction: Direction::Bullish,
                confidence: 70,
            };
        }
        if last < three_back {
            return StructureResult {
                direction: Direction::Bearish,
                confidence: 70,
            };
        }
    }

    StructureResult {
        direction: Direction::Neutral,
        confidence: 40,
    }
}
