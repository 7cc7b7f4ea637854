//! Basic facade usage example
//!
//! Demonstrates thresholds, tag filters and a custom observer next to the
//! built-in console observer.
//!
//! Run with: cargo run --example basic_usage

use rust_log_facade::prelude::*;
use rust_log_facade::{debug, error, info, verbose, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Log Facade - Basic Usage Example ===\n");

    let facade = Facade::builder().threshold(Severity::Verbose).build();

    // Add a custom observer that counts payload-carrying records
    facade.register(Arc::new(|record: &LogRecord, tag: &str, severity: Severity| {
        if let Some(code) = record.payload().downcast_ref::<u16>() {
            println!("   observer saw {} [{}] with status {}", severity, tag, code);
        }
    }));

    println!("1. Logging at different levels:");
    verbose!(facade, "This is a verbose message");
    debug!(facade, "This is a debug message");
    info!(facade, "This is an info message");
    warning!(facade, "This is a warning message");
    error!(facade, tag: "HTTP", payload: 503_u16, "This is an error message");

    println!("\n2. Raising the threshold:");
    facade.set_threshold(Severity::Info);
    debug!(facade, "Debug message (hidden)");
    info!(facade, "Info message (visible)");

    println!("\n3. Filtering by tag:");
    facade.set_tag_filter(["DB"]);
    info!(facade, tag: "UI", "UI message (hidden)");
    info!(facade, "Untagged message (hidden)");
    info!(facade, tag: "DB", "DB message (visible)");

    println!("\n4. Configuration loaded from JSON:");
    facade.configure(FacadeConfig::from_json(r#"{"threshold": "warning"}"#)?);
    info!(facade, "Info message (hidden)");
    warning!(facade, tag: "ANY", "Warning message (visible)");

    let metrics = facade.metrics();
    println!(
        "\nDispatched {}, filtered by severity {}, filtered by tag {}",
        metrics.dispatched(),
        metrics.severity_filtered(),
        metrics.tag_filtered()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
