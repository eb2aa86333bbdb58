// src/dataset/client.rs
use crate::dataset::models::partition_url;
use crate::utils::error::FetchError;
use polars::prelude::*;
use reqwest::header;
use std::io::Cursor;

const INGEST_USER_AGENT: &str = concat!("transcript_ingest/", env!("CARGO_PKG_VERSION"));

/// Loads one partition of the dataset as a DataFrame.
///
/// Implementations either return the whole partition or an error; there is
/// no partial result.
#[allow(async_fn_in_trait)]
pub trait PartitionSource {
    /// Human-readable location of the partition, used in progress lines.
    fn locate(&self, partition: &str) -> String;

    async fn load(&self, partition: &str) -> Result<DataFrame, FetchError>;
}

/// Fetches Parquet partitions over HTTPS.
pub struct HttpPartitionSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPartitionSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_dataset_client()?,
            base_url: base_url.into(),
        })
    }
}

impl PartitionSource for HttpPartitionSource {
    fn locate(&self, partition: &str) -> String {
        partition_url(&self.base_url, partition)
    }

    async fn load(&self, partition: &str) -> Result<DataFrame, FetchError> {
        let url = self.locate(partition);
        fetch_partition(&self.client, &url).await
    }
}

/// Creates a reqwest client for the dataset host.
/// No timeout is set; the transport defaults apply.
fn build_dataset_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(INGEST_USER_AGENT)
        .build()
}

/// Downloads a partition file and decodes it.
pub async fn fetch_partition(client: &reqwest::Client, url: &str) -> Result<DataFrame, FetchError> {
    tracing::debug!("Downloading partition from: {}", url);

    let response = client
        .get(url)
        .header(header::ACCEPT, "application/octet-stream, */*")
        .send()
        .await?; // Propagates reqwest::Error as FetchError::Network

    let status = response.status();
    if !status.is_success() {
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::PartitionNotFound(url.to_string()));
        }
        return Err(FetchError::Http(status));
    }

    let body = response.bytes().await?;
    tracing::debug!("Downloaded {} bytes from {}", body.len(), url);

    decode_partition(body)
}

/// Decodes a Parquet file held in memory.
pub fn decode_partition<B>(body: B) -> Result<DataFrame, FetchError>
where
    B: AsRef<[u8]> + Send + Sync,
{
    let df = ParquetReader::new(Cursor::new(body)).finish()?;
    Ok(df)
}
