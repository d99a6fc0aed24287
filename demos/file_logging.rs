//! File logging example
//!
//! Demonstrates file and dual output modes, timestamped formatting, and
//! routing errors to registered handlers.
//!
//! Run with: cargo run --example file_logging

use colorlog::prelude::*;
use std::fmt;
use std::fs;

#[derive(Debug)]
struct DiskFull {
    free_bytes: u64,
}

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk full ({} bytes free)", self.free_bytes)
    }
}

impl std::error::Error for DiskFull {}

fn main() -> Result<()> {
    println!("=== colorlog - File Logging Example ===\n");

    let path = std::env::temp_dir().join("colorlog_file_example.log");
    let _ = fs::remove_file(&path);

    let logger = Logger::builder()
        .level(LogLevel::Info)
        .output_mode(OutputMode::Both)
        .file(&path)
        .formatter(TimestampFormatter::new(
            DefaultFormatter,
            TimestampFormat::Iso8601,
        ))
        .try_build()?;

    logger.info("Written to the file twice: once as the primary line, once as the plain copy");
    logger.set_output_mode(OutputMode::File);
    logger.warn("Written to the file once");

    logger.register_error_handler_for::<DiskFull>(|e: &(dyn std::error::Error + 'static)| {
        println!("DiskFull handler invoked: {}", e);
    });
    logger.set_capture_stack_traces(false);
    logger.handle_error(&DiskFull { free_bytes: 512 }, "saving snapshot");

    logger.flush()?;

    println!("\nLog file contents ({}):", path.display());
    print!("{}", fs::read_to_string(&path)?);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
