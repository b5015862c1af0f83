use crate::constant::ScoreError;

use super::ema::ema;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdOutput {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Latest MACD line, signal line and histogram.
pub fn macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdOutput, ScoreError> {
    if closes.is_empty() {
        return Err(ScoreError::ShortSeries);
    }

    let fast_line = ema(closes, fast);
    let slow_line = ema(closes, slow);
    let macd_line: Vec<f64> = fast_line
        .iter()
        .zip(slow_line.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema(&macd_line, signal);

    let macd_last = *macd_line.last().expect("non-empty input");
    let signal_last = *signal_line.last().expect("non-empty input");
    Ok(MacdOutput {
        macd: macd_last,
        signal: signal_last,
        histogram: macd_last - signal_last,
    })
}
