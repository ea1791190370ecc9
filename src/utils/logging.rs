use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::env;
use std::io::Write;

/// Maps a `RUST_LOG`-style level name to a filter, defaulting to info.
pub fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn init_logging() -> Result<(), SetLoggerError> {
    init_logging_with_level(None)
}

/// Like `init_logging`, but an explicit level wins over `RUST_LOG`.
pub fn init_logging_with_level(level: Option<LevelFilter>) -> Result<(), SetLoggerError> {
    let log_level = level.unwrap_or_else(|| {
        parse_level(&env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
    });

    let mut builder = Builder::from_default_env();

    builder.format(|buf, record| {
        let timestamp = buf.timestamp();
        let target = record.target();
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        match record.level() {
            Level::Info => writeln!(buf, "{} [INFO] [{}]: {}", timestamp, target, record.args()),
            level => writeln!(
                buf,
                "{} [{}] [{}:{}] {}: {}",
                timestamp,
                level,
                file,
                line,
                target,
                record.args()
            ),
        }
    });

    builder
        .filter_level(log_level)
        .target(Target::Stdout)
        .try_init()
}

pub fn log_error_with_context(error: &anyhow::Error, context: &str) {
    log::error!("[{}] {}", context, error);

    let mut source = error.source();
    while let Some(err) = source {
        log::error!("  Caused by: {}", err);
        source = err.source();
    }
}

pub fn log_calendar_parse(events_count: usize, dropped: usize, duration_ms: u64) {
    if dropped > 0 {
        log::debug!(
            "[Calendar] Parsed {} events, dropped {} incomplete, in {}ms",
            events_count,
            dropped,
            duration_ms
        );
    } else {
        log::debug!("[Calendar] Parsed {} events in {}ms", events_count, duration_ms);
    }
}

pub fn log_settings_loaded(source: &str, words_per_minute: u32) {
    log::info!(
        "[Config] Settings from {} ({} words per minute)",
        source,
        words_per_minute
    );
}
