use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constant::{DataError, Timeframe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub adx_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            ema_fast: 20,
            ema_slow: 50,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            adx_period: 14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    pub symbol: String,
    /// Insertion order is display order.
    pub timeframes: Vec<Timeframe>,
    pub refresh_secs: u64,
    /// Bars requested from the source per timeframe per cycle.
    pub bar_count: usize,
    pub indicators: IndicatorConfig,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            symbol: "EURUSD".to_string(),
            timeframes: vec![
                Timeframe::W1,
                Timeframe::D1,
                Timeframe::H4,
                Timeframe::H1,
                Timeframe::M15,
            ],
            refresh_secs: 60,
            bar_count: 300,
            indicators: IndicatorConfig::default(),
        }
    }
}

impl ChecklistConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        match path.extension().and_then(|x| x.to_str()) {
            Some("json") => Ok(serde_json::from_str(&text)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&text)?),
            other => Err(DataError::UnsupportedConfigFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
