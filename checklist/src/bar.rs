use chrono::{DateTime, Utc};

use crate::constant::DataError;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub datetime: DateTime<Utc>,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
}

impl Bar {
    pub fn body(&self) -> f64 {
        (self.close_price - self.open_price).abs()
    }

    pub fn total_range(&self) -> f64 {
        self.high_price - self.low_price
    }
}

/// Ordered oldest-to-newest, validated at construction, read-only after.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(bars: Vec<Bar>) -> Result<Self, DataError> {
        if bars.is_empty() {
            return Err(DataError::EmptySeries);
        }

        for bar in &bars {
            let body_high = bar.open_price.max(bar.close_price);
            let body_low = bar.open_price.min(bar.close_price);
            if bar.high_price < body_high || bar.low_price > body_low {
                return Err(DataError::InvalidBar(format!(
                    "ohlc out of range at {}",
                    bar.datetime
                )));
            }
        }

        for pair in bars.windows(2) {
            if pair[1].datetime <= pair[0].datetime {
                return Err(DataError::UnorderedSeries(format!(
                    "{} followed by {}",
                    pair[0].datetime, pair[1].datetime
                )));
            }
        }

        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn last(&self) -> &Bar {
        self.bars.last().expect("series is never empty")
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|x| x.close_price).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|x| x.high_price).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|x| x.low_price).collect()
    }
}
