//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_rules` library that handles:
//! - Logger initialization
//! - User-facing output formatting
//!
//! The binary takes no arguments; it always runs the built-in configuration.
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;

use dns_rules::initialization::init_logger_with;
use dns_rules::{run_update, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::default();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run_update(config).await {
        Ok(report) => {
            println!(
                "🎉 Whitelist update completed: {} home, {} enterprise, {} hybrid rules in {:.1}s",
                report.home_rules,
                report.enterprise_rules,
                report.hybrid_rules,
                report.elapsed_seconds
            );
            if report.sources_empty > 0 {
                println!(
                    "{} of {} source{} returned no content",
                    report.sources_empty,
                    report.sources_total,
                    if report.sources_total == 1 { "" } else { "s" }
                );
            }
            println!("Rules saved in {}", report.output_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_rules error: {:#}", e);
            process::exit(1);
        }
    }
}
