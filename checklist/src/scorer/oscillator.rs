use serde::Serialize;

use crate::bar::BarSeries;
use crate::config::IndicatorConfig;
use crate::constant::{Alignment, ScoreError};
use crate::indicator::rsi;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OscillatorResult {
    pub value: f64,
    pub confidence: u8,
    pub alignment: Alignment,
}

/// RSI band to confidence: healthy continuation zone scores highest,
/// oversold and overbought extremes lowest.
pub fn confidence_for_rsi(value: f64) -> u8 {
    if (40.0..=70.0).contains(&value) {
        90
    } else if (30.0..40.0).contains(&value) {
        60
    } else if value < 30.0 {
        30
    } else {
        20
    }
}

pub fn score_oscillator(
    series: &BarSeries,
    config: &IndicatorConfig,
) -> Result<OscillatorResult, ScoreError> {
    let value = rsi(&series.closes(), config.rsi_period)?;
    let confidence = confidence_for_rsi(value);
    Ok(OscillatorResult {
        value,
        confidence,
        alignment: Alignment::from_confidence(confidence),
    })
}
