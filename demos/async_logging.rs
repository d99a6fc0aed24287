//! Asynchronous logging example
//!
//! Demonstrates queueing messages from several threads and draining them on
//! shutdown.
//!
//! Run with: cargo run --example async_logging

use colorlog::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== colorlog - Async Logging Example ===\n");

    let logger = Arc::new(Logger::builder().level(LogLevel::Debug).build_async()?);

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for job in 0..5 {
                    logger.info(format!("worker {} finished job {}", worker, job));
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("a worker thread panicked");
        }
    }

    println!("Pending before shutdown: {}", logger.pending());
    logger.shutdown();

    let metrics = logger.metrics();
    println!(
        "\nLines written: {}, filtered: {}, write failures: {}",
        metrics.lines_written(),
        metrics.filtered_count(),
        metrics.write_failures()
    );

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
