/// Exponential moving average seeded with the first value, so
/// `out[0] == values[0]` and `out.len() == values.len()`.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span > 0, "span must be > 0");
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for value in values {
        let next = match prev {
            None => *value,
            Some(prev) => prev + alpha * (*value - prev),
        };
        out.push(next);
        prev = Some(next);
    }
    out
}
