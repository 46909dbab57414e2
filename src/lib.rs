//! dns_rules library: DNS allow-list aggregation
//!
//! This library fetches domain lists and documentation pages from a fixed set
//! of sources, extracts domains from each according to its format, merges them
//! with curated seed domains, and writes three wildcard rule files:
//! `home.txt`, `enterprise.txt`, and `hybrid.txt` (the union of both).
//!
//! # Example
//!
//! ```no_run
//! use dns_rules::{run_update, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output_dir: PathBuf::from("dns-rules"),
//!     ..Default::default()
//! };
//!
//! let report = run_update(config).await?;
//! println!("Wrote {} hybrid rules", report.hybrid_rules);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod rules;

// Re-export public API
pub use config::{Category, Config, LogFormat, LogLevel, Source, SourceFormat};
pub use run::{run_update, UpdateReport};

// Internal run module (contains the update pipeline)
mod run {
    use std::collections::BTreeSet;
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::config::{
        Category, Config, ENTERPRISE_RULES_FILE, HOME_RULES_FILE, HYBRID_RULES_FILE,
    };
    use crate::error_handling::WriteError;
    use crate::fetch::fetch_content;
    use crate::initialization::init_client;
    use crate::rules::save_rules;

    /// Results of an update run.
    #[derive(Debug, Clone)]
    pub struct UpdateReport {
        /// Rules written to `home.txt`
        pub home_rules: usize,
        /// Rules written to `enterprise.txt`
        pub enterprise_rules: usize,
        /// Rules written to `hybrid.txt`
        pub hybrid_rules: usize,
        /// Number of sources fetched
        pub sources_total: usize,
        /// Sources that produced no content (failed fetch or empty body)
        pub sources_empty: usize,
        /// Directory holding the rule files
        pub output_dir: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one full update with the provided configuration.
    ///
    /// Sources are fetched one at a time in configuration order. Each source's
    /// content is passed through the extractor for its format and merged into
    /// its category's set, which starts from the configured seed domains. The
    /// home, enterprise, and hybrid rule files are then written, replacing any
    /// previous run's output.
    ///
    /// A source that cannot be fetched contributes nothing but does not stop
    /// the run.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be initialized
    /// - The output directory cannot be created
    /// - Any rule file cannot be written
    pub async fn run_update(config: Config) -> Result<UpdateReport> {
        let start_time = Instant::now();
        info!("Starting DNS whitelist update");

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let mut home: BTreeSet<String> = config.home_seeds.iter().cloned().collect();
        let mut enterprise: BTreeSet<String> =
            config.enterprise_seeds.iter().cloned().collect();

        let mut sources_empty = 0;
        for source in &config.sources {
            info!("Fetching {} source {}", source.category, source.url);
            let content = fetch_content(&client, &source.url).await;
            if content.is_empty() {
                sources_empty += 1;
                continue;
            }

            let found = source.format.extract(&content);
            debug!(
                "Extracted {} domains from {} ({} format)",
                found.len(),
                source.url,
                source.format
            );

            let target = match source.category {
                Category::Home => &mut home,
                Category::Enterprise => &mut enterprise,
            };
            target.extend(found);
        }

        std::fs::create_dir_all(&config.output_dir)
            .map_err(|source| WriteError::CreateDir {
                path: config.output_dir.clone(),
                source,
            })
            .context("Failed to prepare output directory")?;

        let home_rules = save_rules(&home, &config.output_dir.join(HOME_RULES_FILE))
            .context("Failed to save home rules")?;
        let enterprise_rules =
            save_rules(&enterprise, &config.output_dir.join(ENTERPRISE_RULES_FILE))
                .context("Failed to save enterprise rules")?;
        let hybrid_rules = save_rules(
            home.union(&enterprise),
            &config.output_dir.join(HYBRID_RULES_FILE),
        )
        .context("Failed to save hybrid rules")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!("Whitelist update completed in {:.1}s", elapsed_seconds);

        Ok(UpdateReport {
            home_rules,
            enterprise_rules,
            hybrid_rules,
            sources_total: config.sources.len(),
            sources_empty,
            output_dir: config.output_dir,
            elapsed_seconds,
        })
    }
}
