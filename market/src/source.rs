use std::collections::HashMap;

use chrono::Utc;

use checklist::{Bar, BarSeries, BarSource, Timeframe};

/// 确定性的合成行情源：逐根上涨的 bar 序列，用于演示与测试。
#[derive(Debug, Clone, Copy)]
pub struct SyntheticSource {
    pub start_price: f64,
    pub step: f64,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            step: 0.2,
        }
    }
}

impl SyntheticSource {
    pub fn bars(&self, timeframe: Timeframe, count: usize) -> Vec<Bar> {
        let interval = timeframe.duration();
        let start = Utc::now() - interval * count as i32;
        (0..count)
            .map(|index| {
                let base = self.start_price + index as f64 * self.step;
                Bar {
                    datetime: start + interval * index as i32,
                    open_price: base,
                    high_price: base + 0.6,
                    low_price: base - 0.4,
                    close_price: base + 0.2,
                }
            })
            .collect()
    }
}

impl BarSource for SyntheticSource {
    fn fetch(&self, _symbol: &str, timeframe: Timeframe, count: usize) -> Option<BarSeries> {
        BarSeries::new(self.bars(timeframe, count)).ok()
    }
}

/// 预加载的内存行情源，用于回放与测试。
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    series: HashMap<Timeframe, BarSeries>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, timeframe: Timeframe, series: BarSeries) {
        self.series.insert(timeframe, series);
    }
}

impl BarSource for StaticSource {
    fn fetch(&self, _symbol: &str, timeframe: Timeframe, count: usize) -> Option<BarSeries> {
        let series = self.series.get(&timeframe)?;
        if series.len() <= count {
            return Some(series.clone());
        }
        let bars = series.bars()[series.len() - count..].to_vec();
        BarSeries::new(bars).ok()
    }
}
