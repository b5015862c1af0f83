use std::io::Write;

use checklist::{ChecklistConfig, DataError, Timeframe};

#[test]
fn defaults_match_the_documented_settings() {
    let config = ChecklistConfig::default();
    assert_eq!(config.symbol, "EURUSD");
    assert_eq!(
        config.timeframes,
        vec![
            Timeframe::W1,
            Timeframe::D1,
            Timeframe::H4,
            Timeframe::H1,
            Timeframe::M15,
        ]
    );
    assert_eq!(config.refresh_secs, 60);
    assert_eq!(config.bar_count, 300);

    let periods = config.indicators;
    assert_eq!(periods.rsi_period, 14);
    assert_eq!(periods.ema_fast, 20);
    assert_eq!(periods.ema_slow, 50);
    assert_eq!(periods.macd_fast, 12);
    assert_eq!(periods.macd_slow, 26);
    assert_eq!(periods.macd_signal, 9);
    assert_eq!(periods.adx_period, 14);
}

#[test]
fn timeframe_labels_roundtrip() {
    for timeframe in [
        Timeframe::M15,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
        Timeframe::W1,
    ] {
        assert_eq!(Timeframe::parse(timeframe.as_str()).unwrap(), timeframe);
    }
    assert!(Timeframe::parse("3m").is_err());
}

#[test]
fn yaml_config_overrides_defaults_and_keeps_the_rest() {
    let dir = std::env::temp_dir().join("checklist_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("checklist.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "symbol: GBPUSD").unwrap();
    writeln!(file, "refresh_secs: 30").unwrap();
    writeln!(file, "timeframes: [\"1d\", \"1h\"]").unwrap();
    writeln!(file, "indicators:").unwrap();
    writeln!(file, "  rsi_period: 21").unwrap();

    let config = ChecklistConfig::load(&path).unwrap();
    assert_eq!(config.symbol, "GBPUSD");
    assert_eq!(config.refresh_secs, 30);
    assert_eq!(config.timeframes, vec![Timeframe::D1, Timeframe::H1]);
    assert_eq!(config.indicators.rsi_period, 21);
    // Untouched fields keep their defaults.
    assert_eq!(config.bar_count, 300);
    assert_eq!(config.indicators.ema_fast, 20);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = std::env::temp_dir().join("checklist_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("checklist.toml");
    std::fs::write(&path, "symbol = \"EURUSD\"").unwrap();

    assert!(matches!(
        ChecklistConfig::load(&path),
        Err(DataError::UnsupportedConfigFormat(_))
    ));
}
