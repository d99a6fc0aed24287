//! Basic logger usage example
//!
//! Demonstrates synchronous console logging, thresholds, and level colors.
//!
//! Run with: cargo run --example basic_usage

use colorlog::prelude::*;
use colorlog::{error, info};

fn main() {
    println!("=== colorlog - Basic Usage Example ===\n");

    let logger = Logger::builder().level(LogLevel::Debug).build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");
    logger.trace("This is a trace message");

    println!("\n2. Raising the threshold to WARNING:");
    logger.set_log_level(LogLevel::Warn);
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");
    logger.trace("Trace message (visible, trace ranks above fatal)");

    println!("\n3. Macros attach the call site:");
    logger.set_log_level(LogLevel::Debug);
    info!(logger, "Server listening on port {}", 8080);
    error!(logger, "Request failed with status {}", 503);

    println!("\n4. Sequences and optional values:");
    logger.info(vec!["user=", "alice", " action=", "login"]);
    logger.log_optional(LogLevel::Info, "", 0, Some(42));
    logger.log_optional::<i32>(LogLevel::Info, "", 0, None);

    println!("\n5. Custom level color:");
    logger.set_log_level_color(LogLevel::Info, "\x1b[1;34m");
    logger.info("Info is now bold blue on a terminal");

    println!("\n=== Example completed successfully! ===");
}
