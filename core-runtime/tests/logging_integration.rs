//! Integration tests for logging system

use bridge_traits::{ConsoleLogger, LogLevel};
use core_runtime::logging::{
    init_logging, redact_if_sensitive, strip_location, LogFormat, LoggingConfig,
};
use std::sync::Arc;

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn)
        .with_spans(false)
        .with_target(false)
        .with_thread_info(true)
        .with_logger_sink(Arc::new(ConsoleLogger::default()));

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(!config.enable_spans);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
    assert!(config.logger_sink.is_some());
}

#[test]
fn test_debug_output_hides_sink() {
    let config = LoggingConfig::default().with_logger_sink(Arc::new(ConsoleLogger::default()));
    let rendered = format!("{:?}", config);
    assert!(rendered.contains("LoggerSink { ... }"));
}

#[test]
fn test_init_logging_only_once() {
    // Only one global subscriber can be installed per process; this is the
    // single test in this binary that touches it.
    let first = init_logging(LoggingConfig::default().with_format(LogFormat::Compact));
    assert!(first.is_ok());

    let second = init_logging(LoggingConfig::default());
    assert!(second.is_err());
    assert!(second
        .unwrap_err()
        .to_string()
        .contains("Failed to initialize logging"));
}

#[test]
fn test_invalid_filter_is_reported() {
    // Filter validation happens before the global subscriber is touched.
    let result = init_logging(LoggingConfig::default().with_filter("core_search=loud"));
    assert!(result.unwrap_err().to_string().contains("Invalid log filter"));
}

#[test]
fn test_search_text_never_logged_verbatim() {
    let redacted = redact_if_sensitive("query", "bohemian rhapsody");
    assert!(!redacted.contains("bohemian"));
    assert_eq!(redacted, "[REDACTED len=17]");
}

#[test]
fn test_location_stripping() {
    assert_eq!(
        strip_location("https://cdn.example.com/tracks/123/stream.mp3"),
        "stream.mp3"
    );
    assert_eq!(strip_location("D:\\downloads\\track.ogg"), "track.ogg");
    assert_eq!(strip_location(""), "");
}
