use serde::Serialize;

use crate::bar::BarSeries;
use crate::config::IndicatorConfig;
use crate::constant::{Const, Direction, ScoreError};
use crate::indicator::{adx, ema};
use crate::structure::market_structure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendResult {
    pub direction: Direction,
    pub confidence: u8,
}

/// Composite trend score: EMA ordering (0.40), ADX strength (0.25),
/// market structure (0.25) and fast-EMA slope (0.10), rounded to an
/// integer percentage. Direction is Bullish iff the composite is at
/// least 50.
pub fn score_trend(
    series: &BarSeries,
    config: &IndicatorConfig,
) -> Result<TrendResult, ScoreError> {
    let closes = series.closes();
    if closes.len() < Const::EMA_SLOPE_LOOKBACK {
        return Err(ScoreError::ShortSeries);
    }

    let ema_fast = ema(&closes, config.ema_fast);
    let ema_slow = ema(&closes, config.ema_slow);

    let last = closes.len() - 1;
    let ema_direction_score = if ema_fast[last] > ema_slow[last] {
        100.0
    } else {
        0.0
    };

    let adx_value = adx(&series.highs(), &series.lows(), &closes, config.adx_period)?;
    let adx_score = if adx_value >= 25.0 {
        100.0
    } else if adx_value >= 20.0 {
        60.0
    } else {
        30.0
    };

    let structure = market_structure(&closes);

    let slope = ema_fast[last] - ema_fast[closes.len() - Const::EMA_SLOPE_LOOKBACK];
    let momentum_score = if slope > 0.0 { 100.0 } else { 50.0 };

    let confidence = (ema_direction_score * 0.40
        + adx_score * 0.25
        + f64::from(structure.confidence) * 0.25
        + momentum_score * 0.10)
        .round() as u8;

    let direction = if confidence >= 50 {
        Direction::Bullish
    } else {
        Direction::Bearish
    };

    Ok(TrendResult {
        direction,
        confidence,
    })
}
