//! CSV 行情加载。
//!
//! 每个 (symbol, timeframe) 对应目录下的一个 `{symbol}_{tf}.csv`，
//! 表头兼容 open/high/low/close 别名，时间列支持多种格式。

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use checklist::{Bar, BarSeries, BarSource, Timeframe};

use crate::error::SourceError;

#[derive(Debug, Deserialize)]
struct CsvBarRow {
    datetime: String,
    #[serde(alias = "open")]
    open_price: f64,
    #[serde(alias = "high")]
    high_price: f64,
    #[serde(alias = "low")]
    low_price: f64,
    #[serde(alias = "close")]
    close_price: f64,
}

#[derive(Debug, Clone)]
pub struct CsvBarSource {
    root: PathBuf,
}

impl CsvBarSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, symbol: &str, timeframe: Timeframe) -> PathBuf {
        self.root
            .join(format!("{}_{}.csv", symbol, timeframe.as_str()))
    }

    /// 读取最近 `count` 根 bar（文件不足时全量返回）。
    pub fn load_series(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        count: usize,
    ) -> Result<BarSeries, SourceError> {
        let bars = load_bars(self.path_for(symbol, timeframe))?;
        let start = bars.len().saturating_sub(count);
        Ok(BarSeries::new(bars[start..].to_vec())?)
    }
}

impl BarSource for CsvBarSource {
    fn fetch(&self, symbol: &str, timeframe: Timeframe, count: usize) -> Option<BarSeries> {
        match self.load_series(symbol, timeframe, count) {
            Ok(series) => Some(series),
            Err(error) => {
                tracing::warn!(symbol, %timeframe, %error, "csv source unavailable");
                None
            }
        }
    }
}

fn load_bars(file_path: impl AsRef<Path>) -> Result<Vec<Bar>, SourceError> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut out = Vec::new();

    for row in reader.deserialize::<CsvBarRow>() {
        let row = row?;
        out.push(Bar {
            datetime: parse_datetime(&row.datetime)?,
            open_price: row.open_price,
            high_price: row.high_price,
            low_price: row.low_price,
            close_price: row.close_price,
        });
    }

    Ok(out)
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>, SourceError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let patterns = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y%m%d%H%M%S%.f",
    ];

    for pattern in patterns {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc));
        }
    }

    Err(SourceError::InvalidDatetime(value.to_string()))
}
