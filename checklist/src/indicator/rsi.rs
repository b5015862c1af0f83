use crate::constant::ScoreError;

/// Relative Strength Index over simple rolling means of the trailing
/// `period` gains and losses. A zero average loss saturates to exactly
/// 100, a zero average gain to exactly 0; a fully flat window is 0/0
/// and therefore indeterminate.
pub fn rsi(closes: &[f64], period: usize) -> Result<f64, ScoreError> {
    assert!(period > 0, "period must be > 0");
    let n = closes.len();
    if n < period + 1 {
        return Err(ScoreError::ShortSeries);
    }

    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for i in (n - period)..n {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gain_sum += delta;
        } else {
            loss_sum += -delta;
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return Err(ScoreError::Indeterminate("rsi: flat window"));
        }
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - 100.0 / (1.0 + rs))
}
