pub mod bar;
pub mod config;
pub mod constant;
pub mod engine;
pub mod evaluator;
pub mod indicator;
pub mod logging;
pub mod scorer;
pub mod structure;

pub use bar::{Bar, BarSeries};
pub use config::{ChecklistConfig, IndicatorConfig};
pub use constant::{
	Alignment, Const, DataError, Direction, ReportStatus, ScoreError, Timeframe,
};
pub use engine::{BarSource, ChecklistEngine, Snapshot};
pub use evaluator::{TimeframeEvaluator, TimeframeReport};
pub use indicator::{MacdOutput, adx, ema, macd, rsi};
pub use logging::init_logging;
pub use scorer::{
	MomentumResult, OscillatorResult, TrendResult, confidence_for_macd, confidence_for_rsi,
	score_momentum, score_oscillator, score_trend,
};
pub use structure::{StructureResult, market_structure};
