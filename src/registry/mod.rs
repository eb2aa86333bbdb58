// src/registry/mod.rs
use crate::dataset::models::Transcript;
use crate::extractors::record::PartitionFrame;
use crate::extractors::transcript::normalize_record;
use std::collections::BTreeMap;

/// Transcripts grouped by canonical ticker, in arrival order.
///
/// Nothing is deduplicated: the same call appearing in two partitions is kept twice.
#[derive(Debug, Default)]
pub struct TranscriptRegistry {
    by_ticker: BTreeMap<String, Vec<Transcript>>,
    total_records: usize,
    dropped_rows: usize,
}

impl TranscriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transcript under its ticker.
    pub fn insert(&mut self, transcript: Transcript) {
        self.by_ticker
            .entry(transcript.ticker.clone())
            .or_default()
            .push(transcript);
        self.total_records += 1;
    }

    /// Normalizes every row of a partition into the registry.
    /// Returns how many rows were accepted.
    pub fn ingest_frame(&mut self, frame: &PartitionFrame) -> usize {
        let mut accepted = 0;
        for row in frame.rows() {
            match normalize_record(&row) {
                Some(transcript) => {
                    self.insert(transcript);
                    accepted += 1;
                }
                None => self.dropped_rows += 1,
            }
        }
        accepted
    }

    #[cfg(test)]
    pub fn get(&self, ticker: &str) -> Option<&[Transcript]> {
        self.by_ticker.get(ticker).map(Vec::as_slice)
    }

    /// Accepted transcripts across all tickers.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn ticker_count(&self) -> usize {
        self.by_ticker.len()
    }

    /// Rows discarded for a missing or empty ticker.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}

impl IntoIterator for TranscriptRegistry {
    type Item = (String, Vec<Transcript>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<Transcript>>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_ticker.into_iter()
    }
}
