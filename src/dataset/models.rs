// src/dataset/models.rs
use serde::{Deserialize, Serialize};

/// Hugging Face dataset the transcripts are pulled from.
pub const DATASET_ID: &str = "glopardo/sp500-earnings-transcripts";

pub const DEFAULT_BASE_URL: &str =
    "https://huggingface.co/datasets/glopardo/sp500-earnings-transcripts/resolve/main/";

/// Partitions of the train split, in load order.
pub const DEFAULT_PARTITIONS: [&str; 3] = [
    "data/train-00000-of-00003.parquet",
    "data/train-00001-of-00003.parquet",
    "data/train-00002-of-00003.parquet",
];

pub const DEFAULT_OUTPUT_DIR: &str = "batch_data/transcripts";

/// The dataset carries no fiscal quarter column.
pub const UNKNOWN_FISCAL_QUARTER: &str = "Unknown";

/// One earnings-call transcript as written to `{TICKER}.json`.
///
/// Field order here is the key order in the output files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub ticker: String,
    pub company_name: String,
    pub date: String,
    pub content: String,
    pub fiscal_quarter: String,
    pub source: String,
}

/// Joins the dataset base URL and a relative partition id.
pub fn partition_url(base_url: &str, partition: &str) -> String {
    if base_url.is_empty() || base_url.ends_with('/') {
        format!("{}{}", base_url, partition)
    } else {
        format!("{}/{}", base_url, partition)
    }
}
