//! 运行时装配：行情源 + 评估引擎 + 周期刷新 + 表格输出。

mod render;

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use checklist::{BarSource, ChecklistConfig, ChecklistEngine, Snapshot};
use market::{CsvBarSource, SyntheticSource};

pub use render::{Band, band_for, render_snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
	Synthetic,
	Csv,
}

pub fn init() {
	checklist::init_logging();
}

pub fn run_live_bootstrap() {
	run_live_with_mode(RuntimeMode::Synthetic);
}

pub fn run_live_with_mode(mode: RuntimeMode) {
	let config = load_config();
	tracing::info!(
		symbol = %config.symbol,
		refresh_secs = config.refresh_secs,
		timeframes = config.timeframes.len(),
		?mode,
		"runtime starting"
	);

	let source: Box<dyn BarSource> = match mode {
		RuntimeMode::Synthetic => Box::new(SyntheticSource::default()),
		RuntimeMode::Csv => {
			let root = std::env::var("CHECKLIST_DATA_DIR").unwrap_or_else(|_| "data".to_string());
			Box::new(CsvBarSource::new(root))
		}
	};

	let max_cycles = std::env::var("CHECKLIST_CYCLES")
		.ok()
		.and_then(|v| v.parse::<u64>().ok());

	let engine = ChecklistEngine::new(config);
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_time()
		.build()
		.expect("tokio runtime");
	runtime.block_on(run_loop(&engine, source.as_ref(), max_cycles));
}

fn load_config() -> ChecklistConfig {
	let Ok(path) = std::env::var("CHECKLIST_CONFIG") else {
		return ChecklistConfig::default();
	};
	match ChecklistConfig::load(&path) {
		Ok(config) => config,
		Err(error) => {
			tracing::warn!(path = %path, %error, "config load failed, using defaults");
			ChecklistConfig::default()
		}
	}
}

/// 刷新循环：tick 错过则跳过（不补跑），周期之间严格串行，
/// 不会把上一周期的部分结果并入新快照。
async fn run_loop(engine: &ChecklistEngine, source: &dyn BarSource, max_cycles: Option<u64>) {
	let mut interval = tokio::time::interval(Duration::from_secs(
		engine.config().refresh_secs.max(1),
	));
	interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

	let mut completed = 0u64;
	loop {
		interval.tick().await;
		let snapshot = engine.run_cycle(source);
		println!("{}", render_snapshot(&snapshot));

		completed += 1;
		if let Some(max) = max_cycles
			&& completed >= max
		{
			return;
		}
	}
}

/// 连续跑 `cycles` 个周期并返回全部快照（测试与回放用）。
pub fn run_cycles(engine: &ChecklistEngine, source: &dyn BarSource, cycles: usize) -> Vec<Snapshot> {
	(0..cycles).map(|_| engine.run_cycle(source)).collect()
}

#[cfg(test)]
mod tests {
	use super::{render_snapshot, run_cycles};
	use checklist::{ChecklistConfig, ChecklistEngine, ReportStatus};
	use market::SyntheticSource;

	#[test]
	fn cycles_are_assembled_whole_and_in_order() {
		let config = ChecklistConfig::default();
		let timeframes = config.timeframes.clone();
		let engine = ChecklistEngine::new(config);
		let source = SyntheticSource::default();

		let snapshots = run_cycles(&engine, &source, 2);
		assert_eq!(snapshots.len(), 2);
		for snapshot in &snapshots {
			let reported: Vec<_> = snapshot.reports.iter().map(|r| r.timeframe).collect();
			assert_eq!(reported, timeframes);
			assert!(snapshot
				.reports
				.iter()
				.all(|r| r.status == ReportStatus::Ok));
		}
		assert_eq!(snapshots[0].reports, snapshots[1].reports);
	}

	#[test]
	fn rendered_table_carries_every_timeframe_row() {
		let engine = ChecklistEngine::new(ChecklistConfig::default());
		let snapshot = engine.run_cycle(&SyntheticSource::default());
		let table = render_snapshot(&snapshot);
		for report in &snapshot.reports {
			assert!(table.contains(report.timeframe.as_str()));
		}
		assert!(table.contains("Last update:"));
	}
}
