use crate::logger::{LogSink, sql_level};

use kb_config::{LogLevel, LoggingConfig};

use std::path::PathBuf;

use log::LevelFilter;

#[test]
fn test_file_sink_wins_over_color() {
    let sink = LogSink::new(Some(PathBuf::from("log/kanban.log")), true);

    assert_eq!(sink, LogSink::File(PathBuf::from("log/kanban.log")));
}

#[test]
fn test_stdout_sink_keeps_color_choice() {
    assert_eq!(LogSink::new(None, false), LogSink::Stdout { colored: false });
}

#[test]
fn test_sql_level_defaults_below_app_level() {
    let logging = LoggingConfig::default();

    assert_eq!(sql_level(&logging), LevelFilter::Warn);
}

#[test]
fn test_sql_level_never_louder_than_app_level() {
    let logging = LoggingConfig {
        level: LogLevel(LevelFilter::Error),
        sql_level: LogLevel(LevelFilter::Trace),
        ..LoggingConfig::default()
    };

    assert_eq!(sql_level(&logging), LevelFilter::Error);
}
