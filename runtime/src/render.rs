use checklist::{ReportStatus, Snapshot, TimeframeReport};

/// Display banding preserved for presentation equivalence:
/// >= 70 positive, 50-69 neutral, < 50 negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
	Positive,
	Neutral,
	Negative,
}

pub fn band_for(confidence: u8) -> Band {
	if confidence >= 70 {
		Band::Positive
	} else if confidence >= 50 {
		Band::Neutral
	} else {
		Band::Negative
	}
}

const NA: &str = "N/A";

pub fn render_snapshot(snapshot: &Snapshot) -> String {
	let mut out = String::new();
	out.push_str(&format!(
		"{:<10} {:<8} {:>8} {:>10} {:>7} {:>12} {:>8}   status\n",
		"Timeframe", "Trend", "Trend %", "RSI", "RSI %", "MACD", "MACD %"
	));
	for report in &snapshot.reports {
		out.push_str(&render_report(report));
		out.push('\n');
	}
	out.push_str(&format!(
		"Last update: {} — {}\n",
		snapshot.generated_at.format("%Y-%m-%d %H:%M:%S"),
		snapshot.symbol
	));
	out
}

fn render_report(report: &TimeframeReport) -> String {
	let (trend_dir, trend_pct) = match &report.trend {
		Some(t) => (t.direction.as_str().to_string(), format!("{}%", t.confidence)),
		None => (NA.to_string(), NA.to_string()),
	};
	let (rsi_value, rsi_pct) = match &report.oscillator {
		Some(o) => (format!("{:.2}", o.value), format!("{}%", o.confidence)),
		None => (NA.to_string(), NA.to_string()),
	};
	let (macd_value, macd_pct) = match &report.momentum {
		Some(m) => (format!("{:.6}", m.macd), format!("{}%", m.confidence)),
		None => (NA.to_string(), NA.to_string()),
	};

	let status = match report.status {
		ReportStatus::Ok => "ok",
		ReportStatus::DataUnavailable => "data unavailable",
		ReportStatus::InsufficientData => "insufficient data",
		ReportStatus::ComputationError => "computation error",
	};

	format!(
		"{:<10} {:<8} {:>8} {:>10} {:>7} {:>12} {:>8}   {}",
		report.timeframe.as_str(),
		trend_dir,
		trend_pct,
		rsi_value,
		rsi_pct,
		macd_value,
		macd_pct,
		status
	)
}

#[cfg(test)]
mod tests {
	use super::{Band, band_for};

	#[test]
	fn banding_matches_display_contract() {
		assert_eq!(band_for(100), Band::Positive);
		assert_eq!(band_for(70), Band::Positive);
		assert_eq!(band_for(69), Band::Neutral);
		assert_eq!(band_for(50), Band::Neutral);
		assert_eq!(band_for(49), Band::Negative);
		assert_eq!(band_for(0), Band::Negative);
	}
}
