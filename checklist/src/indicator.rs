pub mod adx;
pub mod ema;
pub mod macd;
pub mod rsi;

pub use adx::adx;
pub use ema::ema;
pub use macd::{MacdOutput, macd};
pub use rsi::rsi;
