use serde::Serialize;

use crate::bar::BarSeries;
use crate::config::IndicatorConfig;
use crate::constant::{Alignment, ScoreError};
use crate::indicator::macd;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MomentumResult {
    pub macd: f64,
    pub histogram: f64,
    pub confidence: u8,
    pub alignment: Alignment,
}

/// MACD line versus signal line, confirmed or contradicted by the
/// histogram sign.
pub fn confidence_for_macd(macd_line: f64, signal_line: f64, histogram: f64) -> u8 {
    if macd_line > signal_line && histogram > 0.0 {
        90
    } else if macd_line > signal_line {
        70
    } else if macd_line < signal_line && histogram < 0.0 {
        20
    } else {
        40
    }
}

pub fn score_momentum(
    series: &BarSeries,
    config: &IndicatorConfig,
) -> Result<MomentumResult, ScoreError> {
    let output = macd(
        &series.closes(),
        config.macd_fast,
        config.macd_slow,
        config.macd_signal,
    )?;
    let confidence = confidence_for_macd(output.macd, output.signal, output.histogram);
    Ok(MomentumResult {
        macd: output.macd,
        histogram: output.histogram,
        confidence,
        alignment: Alignment::from_confidence(confidence),
    })
}
