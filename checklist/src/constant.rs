use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    SupportsTrade,
    OpposesTrade,
}

impl Alignment {
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= 50 {
            Self::SupportsTrade
        } else {
            Self::OpposesTrade
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SupportsTrade => "Supports Trade",
            Self::OpposesTrade => "Opposes Trade",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "1w")]
    W1,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::D1 => "1d",
            Self::W1 => "1w",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DataError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "15m" => Ok(Self::M15),
            "1h" => Ok(Self::H1),
            "4h" => Ok(Self::H4),
            "1d" => Ok(Self::D1),
            "1w" => Ok(Self::W1),
            _ => Err(DataError::InvalidTimeframe(value.to_string())),
        }
    }

    pub fn duration(self) -> chrono::Duration {
        match self {
            Self::M15 => chrono::Duration::minutes(15),
            Self::H1 => chrono::Duration::hours(1),
            Self::H4 => chrono::Duration::hours(4),
            Self::D1 => chrono::Duration::days(1),
            Self::W1 => chrono::Duration::weeks(1),
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    Ok,
    DataUnavailable,
    InsufficientData,
    ComputationError,
}

pub struct Const;

impl Const {
    /// Blanket minimum bar count before any indicator is invoked.
    pub const MIN_BARS: usize = 60;
    /// Close window inspected by the structure classifier.
    pub const STRUCTURE_WINDOW: usize = 10;
    /// Bars between the two EMA samples used for the slope sub-score.
    pub const EMA_SLOPE_LOOKBACK: usize = 5;
}

#[derive(Debug)]
pub enum DataError {
    InvalidTimeframe(String),
    EmptySeries,
    UnorderedSeries(String),
    InvalidBar(String),
    UnsupportedConfigFormat(String),
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeframe(v) => write!(f, "invalid timeframe: {v}"),
            Self::EmptySeries => write!(f, "bar series is empty"),
            Self::UnorderedSeries(v) => write!(f, "bar series out of order: {v}"),
            Self::InvalidBar(v) => write!(f, "invalid bar: {v}"),
            Self::UnsupportedConfigFormat(v) => write!(f, "unsupported config format: {v}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Yaml(e) => write!(f, "yaml error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_yaml::Error> for DataError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Yaml(value)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Series too short for the requested lookback.
    ShortSeries,
    /// An undefined ratio (0/0) was hit inside the computation.
    Indeterminate(&'static str),
}

impl Display for ScoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShortSeries => write!(f, "series shorter than required lookback"),
            Self::Indeterminate(v) => write!(f, "indeterminate computation: {v}"),
        }
    }
}

impl std::error::Error for ScoreError {}
