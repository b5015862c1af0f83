pub mod momentum;
pub mod oscillator;
pub mod trend;

pub use momentum::{MomentumResult, confidence_for_macd, score_momentum};
pub use oscillator::{OscillatorResult, confidence_for_rsi, score_oscillator};
pub use trend::{TrendResult, score_trend};
