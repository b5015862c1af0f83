use checklist::{ScoreError, adx, ema, macd, rsi};

#[test]
fn ema_is_seeded_with_first_value() {
    let out = ema(&[1.0, 2.0, 3.0], 3);
    assert_eq!(out[0], 1.0);
    assert_eq!(out[1], 1.5);
    assert_eq!(out[2], 2.25);
}

#[test]
fn ema_stays_within_input_bounds() {
    let closes = [3.0, 7.0, 4.0, 9.0, 2.0, 6.0, 5.0, 8.0];
    let out = ema(&closes, 5);
    assert_eq!(out.len(), closes.len());
    for value in out {
        assert!((2.0..=9.0).contains(&value));
    }
}

#[test]
fn rsi_saturates_to_exactly_100_on_pure_gains() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    assert_eq!(rsi(&closes, 14).unwrap(), 100.0);
}

#[test]
fn rsi_saturates_to_exactly_0_on_pure_losses() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    assert_eq!(rsi(&closes, 14).unwrap(), 0.0);
}

#[test]
fn rsi_flat_window_is_indeterminate() {
    let closes = vec![100.0; 20];
    assert!(matches!(
        rsi(&closes, 14),
        Err(ScoreError::Indeterminate(_))
    ));
}

#[test]
fn rsi_matches_hand_computed_ratio() {
    // Trailing deltas: +1.0 then -0.5; avg gain 0.5, avg loss 0.25,
    // RS = 2, RSI = 100 - 100/3.
    let closes = [1.0, 2.0, 1.5];
    let value = rsi(&closes, 2).unwrap();
    assert!((value - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn rsi_rejects_short_series() {
    assert_eq!(rsi(&[1.0, 2.0], 14), Err(ScoreError::ShortSeries));
}

#[test]
fn macd_of_constant_series_is_zero_everywhere() {
    let closes = vec![5.0; 60];
    let out = macd(&closes, 12, 26, 9).unwrap();
    assert_eq!(out.macd, 0.0);
    assert_eq!(out.signal, 0.0);
    assert_eq!(out.histogram, 0.0);
}

#[test]
fn macd_line_is_positive_in_a_sustained_rise() {
    let closes: Vec<f64> = (0..120).map(|i| 100.0 + i as f64 * 0.5).collect();
    let out = macd(&closes, 12, 26, 9).unwrap();
    assert!(out.macd > 0.0);
}

#[test]
fn macd_rejects_empty_series() {
    assert_eq!(macd(&[], 12, 26, 9), Err(ScoreError::ShortSeries));
}

#[test]
fn adx_of_one_sided_rise_is_exactly_100() {
    let n = 40;
    let highs: Vec<f64> = (0..n).map(|i| i as f64 + 1.0).collect();
    let lows: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let closes: Vec<f64> = (0..n).map(|i| i as f64 + 1.0).collect();

    let value = adx(&highs, &lows, &closes, 14).unwrap();
    assert!((value - 100.0).abs() < 1e-9);
}

#[test]
fn adx_of_balanced_chop_is_exactly_zero() {
    // Alternating equal-size up and down bars cancel the directional
    // sums over any even window.
    let n = 60;
    let closes: Vec<f64> = (0..n)
        .map(|i| if i % 2 == 0 { 101.0 } else { 100.0 })
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();

    let value = adx(&highs, &lows, &closes, 14).unwrap();
    assert!(value.abs() < 1e-9);
}

#[test]
fn adx_of_flat_series_is_indeterminate() {
    let highs = vec![100.0; 60];
    let lows = vec![100.0; 60];
    let closes = vec![100.0; 60];
    assert!(matches!(
        adx(&highs, &lows, &closes, 14),
        Err(ScoreError::Indeterminate(_))
    ));
}

#[test]
fn adx_rejects_short_series() {
    let highs = vec![1.0; 20];
    let lows = vec![0.5; 20];
    let closes = vec![0.8; 20];
    assert_eq!(
        adx(&highs, &lows, &closes, 14),
        Err(ScoreError::ShortSeries)
    );
}
