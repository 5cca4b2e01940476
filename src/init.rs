use log::LevelFilter;

/// 將 `--loglevel` 的值轉換成 `LevelFilter`，無法辨識時使用 INFO
#[must_use]
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => LevelFilter::Trace,
        "DEBUG" => LevelFilter::Debug,
        "WARN" | "WARNING" => LevelFilter::Warn,
        "ERROR" | "CRITICAL" => LevelFilter::Error,
        "OFF" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// 初始化 logger，`RUST_LOG` 可覆蓋個別模組的等級
pub fn init_logger(level: &str) {
    let result = env_logger::Builder::new()
        .filter_level(parse_log_level(level))
        .parse_default_env()
        .format_timestamp_secs()
        .format_target(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
