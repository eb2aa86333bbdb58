// src/pipeline.rs
use crate::dataset::client::PartitionSource;
use crate::extractors::record::PartitionFrame;
use crate::extractors::transcript::source_columns;
use crate::registry::TranscriptRegistry;
use crate::storage::StorageManager;
use crate::utils::error::{FetchError, StorageError};

/// Outcome of the fetch and normalize phase.
#[derive(Debug)]
pub struct Ingestion {
    pub registry: TranscriptRegistry,
    pub loaded_partitions: usize,
    pub failures: Vec<(String, FetchError)>,
}

/// Outcome of the write phase.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub files_written: usize,
    pub skipped_tickers: usize,
}

/// Loads each partition in order and groups its rows by ticker.
///
/// A partition that fails to download, decode, or map is logged and skipped
/// as a whole; the remaining partitions still run.
pub async fn ingest_partitions<S: PartitionSource>(source: &S, partitions: &[String]) -> Ingestion {
    let wanted = source_columns();
    let mut registry = TranscriptRegistry::new();
    let mut loaded_partitions = 0;
    let mut failures = Vec::new();

    for partition in partitions {
        tracing::info!("Loading {}...", source.locate(partition));

        let frame = source
            .load(partition)
            .await
            .and_then(|df| PartitionFrame::from_dataframe(&df, &wanted));

        match frame {
            Ok(frame) => {
                tracing::info!("Loaded {} rows.", frame.height());
                registry.ingest_frame(&frame);
                loaded_partitions += 1;
            }
            Err(e) => {
                tracing::error!("Error processing {}: {}", partition, e);
                failures.push((partition.clone(), e));
            }
        }
    }

    tracing::info!("Total transcripts processed: {}", registry.total_records());
    tracing::info!("Total unique tickers: {}", registry.ticker_count());
    tracing::debug!("Rows dropped for missing ticker: {}", registry.dropped_rows());

    Ingestion { registry, loaded_partitions, failures }
}

/// Writes one JSON file per ticker. The first storage failure aborts the phase.
pub fn write_registry(
    storage: &StorageManager,
    registry: TranscriptRegistry,
) -> Result<WriteSummary, StorageError> {
    tracing::info!("Saving to JSON...");

    let mut summary = WriteSummary::default();
    for (ticker, mut transcripts) in registry {
        match storage.save_transcripts(&ticker, &mut transcripts)? {
            Some(_) => summary.files_written += 1,
            None => summary.skipped_tickers += 1,
        }
    }

    tracing::debug!(
        "Wrote {} ticker files to {} ({} tickers skipped)",
        summary.files_written,
        storage.base_dir().display(),
        summary.skipped_tickers
    );

    Ok(summary)
}
