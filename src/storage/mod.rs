// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::dataset::models::Transcript;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the JSON file for a ticker, or None when the ticker has no
    /// alphanumeric characters to name a file after.
    pub fn ticker_path(&self, ticker: &str) -> Option<PathBuf> {
        let stem = clean_file_stem(ticker)?;
        Some(self.base_dir.join(format!("{}.json", stem)))
    }

    /// Sorts a ticker's transcripts newest first and writes them as one
    /// pretty-printed JSON array, replacing any previous file.
    pub fn save_transcripts(
        &self,
        ticker: &str,
        transcripts: &mut [Transcript],
    ) -> Result<Option<PathBuf>, StorageError> {
        let Some(file_path) = self.ticker_path(ticker) else {
            tracing::debug!("Skipping ticker {:?}: nothing left after filename cleaning", ticker);
            return Ok(None);
        };

        sort_newest_first(transcripts);

        let json = serde_json::to_string_pretty(&*transcripts)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, json)
            .map_err(StorageError::IoError)?;

        tracing::debug!("Saved {} transcripts to {}", transcripts.len(), file_path.display());

        Ok(Some(file_path))
    }
}

/// Keeps only alphanumeric characters, e.g. "BRK.B" becomes "BRKB".
pub fn clean_file_stem(ticker: &str) -> Option<String> {
    let stem: String = ticker.chars().filter(|c| c.is_alphanumeric()).collect();
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}

/// Descending by the date text. Plain string order, so only ISO-style dates
/// come out in calendar order; ties keep their arrival order.
pub fn sort_newest_first(transcripts: &mut [Transcript]) {
    transcripts.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_output_dir() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = env::temp_dir().join(format!("transcript_ingest_storage_{}_{id}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn transcript(ticker: &str, date: &str) -> Transcript {
        Transcript {
            ticker: ticker.to_string(),
            company_name: format!("{} call", ticker),
            date: date.to_string(),
            content: format!("{} on {}", ticker, date),
            fiscal_quarter: "Unknown".to_string(),
            source: "glopardo/sp500-earnings-transcripts".to_string(),
        }
    }

    #[test]
    fn test_new_creates_missing_directory() {
        let dir = temp_output_dir().join("nested").join("transcripts");
        assert!(!dir.exists());

        let storage = StorageManager::new(&dir).unwrap();
        assert!(storage.base_dir().is_dir());
    }

    #[test]
    fn test_clean_file_stem() {
        assert_eq!(clean_file_stem("BRK.B").as_deref(), Some("BRKB"));
        assert_eq!(clean_file_stem("BF-B").as_deref(), Some("BFB"));
        assert_eq!(clean_file_stem("AAPL").as_deref(), Some("AAPL"));
        assert_eq!(clean_file_stem(".-/"), None);
    }

    #[test]
    fn test_sort_newest_first_uses_string_order() {
        let mut calls = vec![
            transcript("AAPL", "2023-01-01"),
            transcript("AAPL", "2024-06-15"),
            transcript("AAPL", "2022-11-30"),
        ];
        sort_newest_first(&mut calls);

        let dates: Vec<&str> = calls.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-15", "2023-01-01", "2022-11-30"]);
    }

    #[test]
    fn test_save_writes_sorted_pretty_json() {
        let storage = StorageManager::new(temp_output_dir()).unwrap();
        let mut calls = vec![
            transcript("BRK.B", "2023-01-01"),
            transcript("BRK.B", "2024-06-15"),
        ];

        let path = storage.save_transcripts("BRK.B", &mut calls).unwrap().unwrap();
        assert_eq!(path.file_name().unwrap(), "BRKB.json");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {\n    \"ticker\": \"BRK.B\""), "got:\n{}", written);

        let parsed: Vec<Transcript> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed[0].date, "2024-06-15");
        assert_eq!(parsed[1].date, "2023-01-01");
    }

    #[test]
    fn test_punctuation_only_ticker_writes_nothing() {
        let dir = temp_output_dir();
        let storage = StorageManager::new(&dir).unwrap();
        let mut calls = vec![transcript("...", "2024-01-01")];

        let written = storage.save_transcripts("...", &mut calls).unwrap();
        assert!(written.is_none());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_save_overwrites_previous_file() {
        let storage = StorageManager::new(temp_output_dir()).unwrap();

        let mut first = vec![transcript("MSFT", "2024-01-01"), transcript("MSFT", "2023-01-01")];
        let path = storage.save_transcripts("MSFT", &mut first).unwrap().unwrap();

        let mut second = vec![transcript("MSFT", "2022-01-01")];
        storage.save_transcripts("MSFT", &mut second).unwrap();

        let parsed: Vec<Transcript> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, second);
    }
}
