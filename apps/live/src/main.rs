fn main() {
	runtime::init();

	let mode_key = std::env::var("CHECKLIST_MODE")
		.unwrap_or_else(|_| "synthetic".to_string())
		.to_ascii_lowercase();
	let mode = match mode_key.as_str() {
		"csv" => runtime::RuntimeMode::Csv,
		_ => runtime::RuntimeMode::Synthetic,
	};

	runtime::run_live_with_mode(mode);
}
