//! Diagnostic logging for pylaunch
//!
//! Human format goes through `env_logger`; `json` / `json:<level>` switches to
//! a JSON-lines logger that writes to `PYLAUNCH_LOG_PATH` or stderr. Console
//! messages meant for the user never go through here.

use chrono::{Local, Utc};
use log::{LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

/// Log level variable
pub const ENV_LOG_LEVEL: &str = "PYLAUNCH_LOG_LEVEL";
/// JSON log file variable
pub const ENV_LOG_PATH: &str = "PYLAUNCH_LOG_PATH";
/// Level used when nothing is configured; a clean run prints nothing
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parsed form of a level string such as `debug`, `json` or `json:trace`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Emit JSON lines instead of the human format
    pub json: bool,
    /// Maximum level emitted
    pub filter: LevelFilter,
}

impl LogSettings {
    /// Parse a level string; unknown levels fall back to `warn`
    pub fn parse(level_str: &str) -> Self {
        let level_str = level_str.trim().to_lowercase();
        let (json, actual_level) = if let Some(stripped) = level_str.strip_prefix("json:") {
            (true, stripped)
        } else if level_str == "json" {
            (true, "info")
        } else {
            (false, level_str.as_str())
        };

        let filter = match actual_level {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Warn,
        };

        Self { json, filter }
    }
}

/// JSON logger implementation
#[derive(Debug)]
pub struct JsonLogger {
    filter: LevelFilter,
    target_file: Mutex<Option<std::fs::File>>,
}

impl JsonLogger {
    /// Create a new JSON logger writing to `log_path`, or stderr when absent
    pub fn new(filter: LevelFilter, log_path: Option<String>) -> Self {
        let target_file = log_path
            .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());

        JsonLogger {
            filter,
            target_file: Mutex::new(target_file),
        }
    }

    /// Initialize the global logger from a level string; returns the parsed settings
    pub fn init_with_level(level_str: &str) -> LogSettings {
        let settings = LogSettings::parse(level_str);

        if !settings.json {
            let result = env_logger::Builder::new()
                .filter_level(settings.filter)
                .format(|buf, record| {
                    write!(buf, "🐍 ")?;
                    write!(
                        buf,
                        "[{} {} {}] ",
                        Local::now().format("%Y-%m-%dT%H:%M:%S"),
                        record.level(),
                        record.target()
                    )?;
                    writeln!(buf, "{}", record.args())
                })
                .try_init();
            if let Err(e) = result {
                eprintln!("Failed to initialize logger: {e}");
            }
            return settings;
        }

        let logger = Box::new(JsonLogger::new(settings.filter, env::var(ENV_LOG_PATH).ok()));
        if let Err(e) = log::set_boxed_logger(logger) {
            eprintln!("Failed to initialize JSON logger: {e}");
            return settings;
        }

        log::set_max_level(settings.filter);
        settings
    }

    /// Initialize from `PYLAUNCH_LOG_LEVEL`, defaulting to `warn`
    pub fn init() -> LogSettings {
        let level = env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        Self::init_with_level(&level)
    }

    fn entry(record: &Record<'_>) -> serde_json::Value {
        json!({
            "@timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            "@level": record.level().to_string().to_lowercase(),
            "@message": record.args().to_string(),
            "@module": record.target(),
            "@pid": std::process::id(),
            "@file": record.file().unwrap_or("unknown"),
            "@line": record.line().unwrap_or(0),
        })
    }
}

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let json_string = format!(
            "{}\n",
            serde_json::to_string(&Self::entry(record)).unwrap_or_default()
        );

        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.write_all(json_string.as_bytes());
                let _ = file.flush();
                return;
            }
        }
        let _ = io::stderr().write_all(json_string.as_bytes());
        let _ = io::stderr().flush();
    }

    fn flush(&self) {
        if let Ok(mut file_guard) = self.target_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let _ = file.flush();
            }
        }
        let _ = io::stderr().flush();
    }
}
