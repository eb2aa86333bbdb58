// src/main.rs
mod dataset;
mod extractors;
mod pipeline;
mod registry;
mod storage;
mod utils;

use clap::Parser;
use dataset::models::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_PARTITIONS};
use dataset::HttpPartitionSource;
use storage::StorageManager;
use utils::AppError;

/// Downloads the S&P 500 earnings-call transcript dataset and writes one
/// JSON file per ticker.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory for the per-ticker JSON files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: String,

    /// Base URL the partition paths are resolved against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Partition path relative to the base URL (repeatable, loaded in order)
    #[arg(short, long = "partition", default_values_t = DEFAULT_PARTITIONS.map(String::from))]
    partitions: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting ingest with args: {:?}", args);

    if args.base_url.trim().is_empty() {
        return Err(AppError::Config("base URL must not be empty".to_string()));
    }

    // 3. Initialize storage before any download so a bad output path fails fast
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Fetch and group every partition
    let source = HttpPartitionSource::new(args.base_url.as_str())?;
    let ingestion = pipeline::ingest_partitions(&source, &args.partitions).await;

    tracing::debug!(
        "{} of {} partitions loaded, {} failed",
        ingestion.loaded_partitions,
        args.partitions.len(),
        ingestion.failures.len()
    );

    // 5. Write one file per ticker; storage errors end the run
    pipeline::write_registry(&storage, ingestion.registry)?;

    tracing::info!("Done!");

    Ok(())
}
