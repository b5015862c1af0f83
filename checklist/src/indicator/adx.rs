use crate::constant::ScoreError;

/// Average Directional Index with plain windowed sums for the TR and
/// DM aggregates (not Wilder's recursive smoothing) and the DX mean
/// taken over the trailing `period` values. Returns only the latest
/// value.
pub fn adx(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<f64, ScoreError> {
    assert!(period > 0, "period must be > 0");
    let n = closes.len();
    debug_assert!(highs.len() == n && lows.len() == n);
    // Earliest DX window reaches back to index n - 2 * period + 1 and
    // true range needs the previous close.
    if n < 2 * period {
        return Err(ScoreError::ShortSeries);
    }

    let mut tr = vec![0.0; n];
    let mut plus_dm = vec![0.0; n];
    let mut minus_dm = vec![0.0; n];
    for i in 1..n {
        let h_l = highs[i] - lows[i];
        let h_pc = (highs[i] - closes[i - 1]).abs();
        let l_pc = (lows[i] - closes[i - 1]).abs();
        tr[i] = h_l.max(h_pc).max(l_pc);

        let up = highs[i] - highs[i - 1];
        let down = lows[i - 1] - lows[i];
        let raw_plus = if up > 0.0 { up } else { 0.0 };
        let raw_minus = if down > 0.0 { down } else { 0.0 };
        // Mutually exclusive: only the strictly larger delta survives.
        plus_dm[i] = if raw_plus > raw_minus { raw_plus } else { 0.0 };
        minus_dm[i] = if raw_minus > raw_plus { raw_minus } else { 0.0 };
    }

    let mut dx_sum = 0.0;
    for end in (n - period)..n {
        let start = end + 1 - period;
        let tr_sum: f64 = tr[start..=end].iter().sum();
        let plus_sum: f64 = plus_dm[start..=end].iter().sum();
        let minus_sum: f64 = minus_dm[start..=end].iter().sum();

        if tr_sum == 0.0 {
            return Err(ScoreError::Indeterminate("adx: zero true range sum"));
        }
        let plus_di = 100.0 * (plus_sum / tr_sum);
        let minus_di = 100.0 * (minus_sum / tr_sum);
        let di_sum = plus_di + minus_di;
        if di_sum == 0.0 {
            return Err(ScoreError::Indeterminate("adx: zero directional sum"));
        }
        dx_sum += 100.0 * (plus_di - minus_di).abs() / di_sum;
    }

    Ok(dx_sum / period as f64)
}
