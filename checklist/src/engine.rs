use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bar::BarSeries;
use crate::config::ChecklistConfig;
use crate::constant::{DataError, Timeframe};
use crate::evaluator::{TimeframeEvaluator, TimeframeReport};

/// Core-facing data source contract. `None` is the explicit
/// unavailable signal; sources fold their own errors into it.
pub trait BarSource {
    fn fetch(&self, symbol: &str, timeframe: Timeframe, count: usize) -> Option<BarSeries>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub symbol: String,
    pub generated_at: DateTime<Utc>,
    pub reports: Vec<TimeframeReport>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct ChecklistEngine {
    config: ChecklistConfig,
    evaluator: TimeframeEvaluator,
}

impl ChecklistEngine {
    pub fn new(config: ChecklistConfig) -> Self {
        let evaluator = TimeframeEvaluator::new(config.indicators);
        Self { config, evaluator }
    }

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    /// One full evaluation cycle over the configured timeframes, in
    /// configured order. Stateless across cycles apart from the
    /// generation timestamp.
    pub fn run_cycle(&self, source: &dyn BarSource) -> Snapshot {
        let reports = self
            .config
            .timeframes
            .iter()
            .map(|&timeframe| {
                let series =
                    source.fetch(&self.config.symbol, timeframe, self.config.bar_count);
                self.evaluator.evaluate(timeframe, series.as_ref())
            })
            .collect();

        let snapshot = Snapshot {
            symbol: self.config.symbol.clone(),
            generated_at: Utc::now(),
            reports,
        };
        tracing::debug!(
            symbol = %snapshot.symbol,
            timeframes = snapshot.reports.len(),
            "cycle complete"
        );
        snapshot
    }
}
