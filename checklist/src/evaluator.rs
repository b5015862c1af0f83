use serde::Serialize;

use crate::bar::BarSeries;
use crate::config::IndicatorConfig;
use crate::constant::{Const, ReportStatus, Timeframe};
use crate::scorer::{
    MomentumResult, OscillatorResult, TrendResult, score_momentum, score_oscillator,
    score_trend,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeframeReport {
    pub timeframe: Timeframe,
    pub trend: Option<TrendResult>,
    pub oscillator: Option<OscillatorResult>,
    pub momentum: Option<MomentumResult>,
    pub status: ReportStatus,
}

impl TimeframeReport {
    fn unavailable(timeframe: Timeframe, status: ReportStatus) -> Self {
        Self {
            timeframe,
            trend: None,
            oscillator: None,
            momentum: None,
            status,
        }
    }
}

/// Re-run per cycle, no state carried between cycles. Scorer failures
/// are caught at the scorer boundary and narrowed to that sub-result;
/// the other scorers still run.
pub struct TimeframeEvaluator {
    config: IndicatorConfig,
}

impl TimeframeEvaluator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn evaluate(
        &self,
        timeframe: Timeframe,
        series: Option<&BarSeries>,
    ) -> TimeframeReport {
        let Some(series) = series else {
            return TimeframeReport::unavailable(timeframe, ReportStatus::DataUnavailable);
        };
        if series.len() < Const::MIN_BARS {
            return TimeframeReport::unavailable(timeframe, ReportStatus::InsufficientData);
        }

        let trend = score_trend(series, &self.config)
            .inspect_err(|e| tracing::warn!(%timeframe, error = %e, "trend scorer failed"))
            .ok();
        let oscillator = score_oscillator(series, &self.config)
            .inspect_err(|e| tracing::warn!(%timeframe, error = %e, "oscillator scorer failed"))
            .ok();
        let momentum = score_momentum(series, &self.config)
            .inspect_err(|e| tracing::warn!(%timeframe, error = %e, "momentum scorer failed"))
            .ok();

        let status = if trend.is_some() && oscillator.is_some() && momentum.is_some() {
            ReportStatus::Ok
        } else {
            ReportStatus::ComputationError
        };

        TimeframeReport {
            timeframe,
            trend,
            oscillator,
            momentum,
            status,
        }
    }
}
