//! `market` crate 入口。
//!
//! 职责：实现 core 的 `BarSource` 契约，向评估引擎提供已取回的
//! bar 序列。取数失败一律折叠为 `None`（即"不可用"信号），由
//! core 统一走 DataUnavailable 路径。
//!
//! 模块分工：
//! - `source`：合成行情源与内存回放源。
//! - `storage`：CSV 文件行情源。
//! - `error`：`SourceError` 错误类型。

mod error;
mod source;
mod storage;

pub use error::SourceError;
pub use source::{StaticSource, SyntheticSource};
pub use storage::CsvBarSource;
