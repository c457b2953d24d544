//! fern dispatch for the `log` facade.
//!
//! Every line reads `[<rfc3339> - LEVEL] message [file:line]`. sqlx reports
//! each statement under the `sqlx::query` target; that target gets its own
//! level so request logs stay readable.

use crate::error::{Result as ServerErrorResult, ServerError};

use kb_config::LoggingConfig;

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

const SQL_TARGET: &str = "sqlx::query";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stdout { colored: bool },
    File(PathBuf),
}

impl LogSink {
    /// A configured file wins; color only applies to stdout.
    pub fn new(file: Option<PathBuf>, colored: bool) -> Self {
        match file {
            Some(path) => Self::File(path),
            None => Self::Stdout { colored },
        }
    }
}

/// The level applied to sqlx statements: the configured SQL level, capped
/// by the overall level.
pub fn sql_level(logging: &LoggingConfig) -> LevelFilter {
    (*logging.sql_level).min(*logging.level)
}

fn write_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

/// Install the global logger. Call once, before anything logs.
pub fn initialize(logging: &LoggingConfig, sink: LogSink) -> ServerErrorResult<()> {
    let level = *logging.level;
    let base = Dispatch::new()
        .level(level)
        .level_for(SQL_TARGET, sql_level(logging));

    let output = match &sink {
        LogSink::File(path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        LogSink::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        LogSink::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    base.chain(output).apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match &sink {
        LogSink::File(path) => info!("Logging at {} to {}", level, path.display()),
        LogSink::Stdout { .. } => info!("Logging at {} to stdout", level),
    }

    Ok(())
}
