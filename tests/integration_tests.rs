//! Integration tests for the logger
//!
//! These tests verify:
//! - Level gating and the emitted line format
//! - File, console and combined output modes
//! - Failure containment for formatters and sinks
//! - Error handler dispatch
//! - Async draining on shutdown

mod common;

use colorlog::core::error_key;
use colorlog::prelude::*;
use common::{capturing_builder, BrokenPipe, SharedBuffer, StdoutBuffer, TerminalBuffer};
use std::error::Error;
use std::fmt;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Debug)]
struct Foo;

impl fmt::Display for Foo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("foo went wrong")
    }
}

impl Error for Foo {}

#[derive(Debug)]
struct Bar;

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bar went wrong")
    }
}

impl Error for Bar {}

fn counter() -> (Arc<AtomicUsize>, impl ErrorHandler + 'static) {
    let hits = Arc::new(AtomicUsize::new(0));
    let clone = Arc::clone(&hits);
    let handler = move |_: &(dyn Error + 'static)| {
        clone.fetch_add(1, Ordering::SeqCst);
    };
    (hits, handler)
}

#[test]
fn test_file_mode_writes_one_line_per_level() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("out.log");

    let config = LoggerConfig::new()
        .with_level(LogLevel::Debug)
        .with_output_mode(OutputMode::File)
        .with_file(&log_file);
    let logger = Logger::try_new(config).expect("Failed to create logger");

    logger.debug("debug message");
    logger.info("info message");
    logger.warn("warn message");
    logger.error("error message");
    logger.fatal("fatal message");
    logger.trace("trace message");
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);

    let expected = ["DEBUG", "INFO", "WARNING", "ERROR", "FATAL", "TRACE"];
    for (line, name) in lines.iter().zip(expected) {
        assert!(
            line.starts_with(&format!("[{}]", name)),
            "{} should start with [{}]",
            line,
            name
        );
    }
}

#[test]
fn test_warn_threshold_writes_only_error() {
    let (builder, buffer) = capturing_builder(LogLevel::Warn);
    let logger = builder.build();

    logger.info("x");
    logger.error("y");

    assert_eq!(buffer.lines(), vec!["[ERROR] y".to_string()]);
}

#[test]
fn test_location_prefix_from_default_formatter() {
    let (builder, buffer) = capturing_builder(LogLevel::Debug);
    let logger = builder.build();

    logger.warn_at("server.rs", 88, "slow request");
    logger.warn_at("server.rs", 0, "no line");
    logger.warn_at("", 12, "no file");

    assert_eq!(
        buffer.lines(),
        vec![
            "[WARNING] server.rs:88 slow request".to_string(),
            "[WARNING] no line".to_string(),
            "[WARNING] no file".to_string(),
        ]
    );
}

#[test]
fn test_both_mode_writes_file_twice_and_skips_console() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("both.log");
    let console = SharedBuffer::default();

    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .output_mode(OutputMode::Both)
        .file(&log_file)
        .color_context(ColorContext::new(true, true, true))
        .console_appender(TerminalBuffer(console.clone()))
        .try_build()
        .expect("Failed to create logger");

    logger.error("disk failure");
    drop(logger);

    assert_eq!(console.contents(), "");
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "[ERROR] disk failure\n[ERROR] disk failure\n");
}

#[test]
fn test_both_mode_without_file_decorates_console() {
    let console = SharedBuffer::default();
    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .output_mode(OutputMode::Both)
        .color_context(ColorContext::new(true, true, true))
        .console_appender(TerminalBuffer(console.clone()))
        .build();

    logger.error("disk failure");

    assert_eq!(console.contents(), "[\x1b[1;31mERROR\x1b[0m] disk failure\n");
}

#[test]
fn test_file_mode_without_file_falls_back_to_console() {
    let (builder, buffer) = capturing_builder(LogLevel::Info);
    let logger = builder.output_mode(OutputMode::File).build();

    logger.info("nowhere else to go");
    assert_eq!(buffer.lines(), vec!["[INFO] nowhere else to go".to_string()]);
}

#[test]
fn test_console_mode_ignores_open_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("unused.log");
    let (builder, buffer) = capturing_builder(LogLevel::Info);
    let logger = builder.file(&log_file).try_build().expect("Failed to create logger");

    logger.info("console only");
    drop(logger);

    assert_eq!(buffer.lines(), vec!["[INFO] console only".to_string()]);
    assert_eq!(fs::read_to_string(&log_file).unwrap(), "");
}

#[test]
fn test_set_output_mode_switches_sinks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("switch.log");
    let (builder, buffer) = capturing_builder(LogLevel::Info);
    let logger = builder.file(&log_file).try_build().expect("Failed to create logger");

    logger.info("one");
    logger.set_output_mode(OutputMode::File);
    logger.info("two");
    logger.set_output_mode(OutputMode::Both);
    logger.info("three");
    drop(logger);

    assert_eq!(buffer.lines(), vec!["[INFO] one".to_string()]);
    assert_eq!(
        fs::read_to_string(&log_file).unwrap(),
        "[INFO] two\n[INFO] three\n[INFO] three\n"
    );
}

#[test]
fn test_set_log_file_replaces_and_appends() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");
    fs::write(&second, "[INFO] older run\n").unwrap();

    let (builder, _buffer) = capturing_builder(LogLevel::Info);
    let logger = builder
        .output_mode(OutputMode::File)
        .file(&first)
        .try_build()
        .expect("Failed to create logger");

    logger.info("to first");
    logger.set_log_file(&second).expect("Failed to reopen");
    logger.info("to second");
    drop(logger);

    assert_eq!(fs::read_to_string(&first).unwrap(), "[INFO] to first\n");
    assert_eq!(
        fs::read_to_string(&second).unwrap(),
        "[INFO] older run\n[INFO] to second\n"
    );
}

#[test]
fn test_unopenable_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let bad_path = temp_dir.path().join("no-such-dir").join("app.log");
    let config = LoggerConfig::new().with_file(&bad_path);

    let err = Logger::try_new(config.clone()).err().expect("open should fail");
    assert!(matches!(err, LoggerError::IoOperation { .. }));

    let logger = Logger::new(config);
    assert!(!logger.has_file());

    let (builder, _buffer) = capturing_builder(LogLevel::Info);
    let logger = builder.build();
    assert!(logger.set_log_file(&bad_path).is_err());
}

#[test]
fn test_write_failure_is_contained() {
    let logger = Logger::builder()
        .color_context(ColorContext::disabled())
        .console_writer(BrokenPipe)
        .build();

    logger.info("first");
    logger.error("second");

    assert_eq!(logger.metrics().write_failures(), 2);
    assert_eq!(logger.metrics().lines_written(), 0);
    assert_eq!(logger.log_level(), LogLevel::Info);
}

#[test]
fn test_formatter_panic_falls_back_in_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fallback.log");
    let (builder, _buffer) = capturing_builder(LogLevel::Debug);
    let logger = builder
        .output_mode(OutputMode::File)
        .file(&log_file)
        .formatter(|_: LogLevel, _: &str, line: u32, msg: &str| -> String {
            if line == 13 {
                panic!("unlucky line");
            }
            format!("<{}>", msg)
        })
        .try_build()
        .expect("Failed to create logger");

    logger.info_at("a.rs", 12, "fine");
    logger.info_at("a.rs", 13, "raw");
    drop(logger);

    assert_eq!(
        fs::read_to_string(&log_file).unwrap(),
        "[INFO] <fine>\n[INFO] raw\n"
    );
}

#[test]
fn test_handle_error_invokes_registered_handler_once() {
    let (builder, buffer) = capturing_builder(LogLevel::Debug);
    let logger = builder.build();
    logger.set_capture_stack_traces(false);

    let (foo_hits, foo_handler) = counter();
    let (default_hits, default_handler) = counter();
    logger.register_error_handler(error_key::<Foo>(), foo_handler);
    logger.set_default_error_handler(default_handler);

    logger.handle_error(&Foo, "checkout");
    assert_eq!(foo_hits.load(Ordering::SeqCst), 1);
    assert_eq!(default_hits.load(Ordering::SeqCst), 0);

    logger.handle_error(&Bar, "checkout");
    assert_eq!(foo_hits.load(Ordering::SeqCst), 1);
    assert_eq!(default_hits.load(Ordering::SeqCst), 1);

    assert_eq!(
        buffer.lines(),
        vec![
            "[ERROR] foo went wrong".to_string(),
            "[ERROR] bar went wrong".to_string(),
        ]
    );
}

#[test]
fn test_handle_error_context_reaches_formatter() {
    let (builder, buffer) = capturing_builder(LogLevel::Debug);
    let logger = builder
        .formatter(|_: LogLevel, file: &str, _: u32, msg: &str| format!("({}) {}", file, msg))
        .build();
    logger.set_capture_stack_traces(false);

    logger.handle_error(&Foo, "payment");
    assert_eq!(buffer.lines(), vec!["[ERROR] (payment) foo went wrong".to_string()]);
}

#[test]
fn test_handle_error_dumps_stack_trace_to_console() {
    let (builder, buffer) = capturing_builder(LogLevel::Debug);
    let logger = builder.build();
    let (_hits, handler) = counter();
    logger.set_default_error_handler(handler);

    logger.handle_error(&Foo, "trace");

    let contents = buffer.contents();
    assert!(contents.starts_with("[ERROR] foo went wrong\n"));
    // Capture may be unsupported on the platform, in which case it is skipped.
    if contents.len() > "[ERROR] foo went wrong\n".len() {
        assert!(contents.contains("Stack trace:"));
    }
}

#[test]
fn test_stack_trace_never_reaches_stdout_console() {
    let stdout = SharedBuffer::default();
    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .color_context(ColorContext::disabled())
        .console_appender(StdoutBuffer(stdout.clone()))
        .build();
    let (hits, handler) = counter();
    logger.set_default_error_handler(handler);

    logger.handle_error(&Foo, "trace");

    assert_eq!(stdout.contents(), "[ERROR] foo went wrong\n");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_classifier_routes_dyn_errors() {
    let (builder, _buffer) = capturing_builder(LogLevel::Debug);
    let logger = builder.build();
    logger.set_capture_stack_traces(false);

    let (foo_hits, foo_handler) = counter();
    let (default_hits, default_handler) = counter();
    logger.register_error_handler("Foo", foo_handler);
    logger.set_default_error_handler(default_handler);
    logger.set_error_classifier(|e: &(dyn Error + 'static)| {
        e.is::<Foo>().then(|| "Foo".to_string())
    });

    let boxed: Box<dyn Error> = Box::new(Foo);
    logger.handle_dyn_error(&*boxed, "boxed");
    logger.handle_error(&Foo, "typed");
    assert_eq!(foo_hits.load(Ordering::SeqCst), 2);

    let boxed: Box<dyn Error> = Box::new(Bar);
    logger.handle_dyn_error(&*boxed, "boxed");
    assert_eq!(default_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_registration_is_last_write_wins() {
    let (builder, _buffer) = capturing_builder(LogLevel::Debug);
    let logger = builder.build();
    logger.set_capture_stack_traces(false);

    let (first_hits, first) = counter();
    let (second_hits, second) = counter();
    logger.register_error_handler_for::<Foo>(first);
    logger.register_error_handler_for::<Foo>(second);

    logger.handle_error(&Foo, "ctx");
    assert_eq!(first_hits.load(Ordering::SeqCst), 0);
    assert_eq!(second_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_config_from_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("json.log");
    let json = format!(
        r#"{{"level": "error", "output_mode": "file", "file_path": {}}}"#,
        serde_json::to_string(&log_file).unwrap()
    );

    let config = LoggerConfig::from_json(&json).expect("valid config");
    let logger = Logger::try_new(config).expect("Failed to create logger");
    logger.warn("filtered");
    logger.fatal("kept");
    drop(logger);

    assert_eq!(fs::read_to_string(&log_file).unwrap(), "[FATAL] kept\n");
}

#[test]
fn test_timestamp_formatter_in_logger() {
    let (builder, buffer) = capturing_builder(LogLevel::Info);
    let logger = builder
        .formatter(TimestampFormatter::new(DefaultFormatter, TimestampFormat::Unix))
        .build();

    logger.info_at("clock.rs", 5, "tick");

    let line = buffer.lines().pop().expect("one line");
    let rest = line.strip_prefix("[INFO] ").expect("level prefix");
    let (stamp, body) = rest.split_once(' ').expect("timestamp separator");
    assert!(stamp.parse::<i64>().is_ok(), "{} is not a unix timestamp", stamp);
    assert_eq!(body, "clock.rs:5 tick");
}

#[cfg(feature = "async")]
#[test]
fn test_async_logging_to_file_preserves_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("async.log");

    let config = LoggerConfig::new()
        .with_level(LogLevel::Debug)
        .with_output_mode(OutputMode::File)
        .with_file(&log_file);
    let logger = LoggerFactory::create_async_logger(config).expect("worker should start");

    for i in 0..500 {
        logger.log(LogLevel::Info, "async.rs", 10, format!("Message {}", i));
    }
    assert!(logger.shutdown());

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 500);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("[INFO] async.rs:10 Message {}", i));
    }
}

#[cfg(feature = "async")]
#[test]
fn test_async_threshold_change_applies_to_new_entries() {
    let (builder, buffer) = capturing_builder(LogLevel::Debug);
    let logger = builder.build_async().expect("worker should start");

    logger.debug("kept");
    logger.shutdown();
    logger.set_log_level(LogLevel::Error);
    logger.debug("never queued");

    assert_eq!(buffer.lines(), vec!["[DEBUG] kept".to_string()]);
    assert_eq!(logger.metrics().filtered_count(), 1);
}
