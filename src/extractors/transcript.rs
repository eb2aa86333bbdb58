// src/extractors/transcript.rs
use crate::dataset::models::{Transcript, DATASET_ID, UNKNOWN_FISCAL_QUARTER};
use crate::extractors::record::RawRecord;

/// Ordered source columns for one transcript attribute, with the value used
/// when none of them holds non-empty text.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub names: &'static [&'static str],
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn new(names: &'static [&'static str], default: &'static str) -> Self {
        Self { names, default }
    }

    /// First non-empty value in priority order, else the default.
    pub fn resolve<'a>(&self, record: &RawRecord<'a>) -> &'a str {
        self.names
            .iter()
            .filter_map(|name| record.get(name))
            .find(|value| !value.is_empty())
            .unwrap_or(self.default)
    }
}

pub const TICKER: FieldSpec = FieldSpec::new(&["ticker"], "");
pub const COMPANY_NAME: FieldSpec = FieldSpec::new(&["title"], "");
pub const DATE: FieldSpec = FieldSpec::new(&["date"], "");
pub const CONTENT: FieldSpec = FieldSpec::new(&["transcript", "text", "content"], "");

/// Every column a partition needs to expose for normalization.
pub fn source_columns() -> Vec<&'static str> {
    [TICKER, COMPANY_NAME, DATE, CONTENT]
        .iter()
        .flat_map(|field| field.names.iter().copied())
        .collect()
}

/// Uppercased and trimmed. A whitespace-only ticker canonicalizes to "".
pub fn canonical_ticker(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Maps a raw row onto a Transcript. Rows whose ticker is missing or empty
/// yield None; the check runs on the raw value, before trimming.
pub fn normalize_record(record: &RawRecord<'_>) -> Option<Transcript> {
    let raw_ticker = TICKER.resolve(record);
    if raw_ticker.is_empty() {
        return None;
    }
    let ticker = canonical_ticker(raw_ticker);

    Some(Transcript {
        ticker,
        company_name: COMPANY_NAME.resolve(record).to_string(),
        date: DATE.resolve(record).to_string(),
        content: CONTENT.resolve(record).to_string(),
        fiscal_quarter: UNKNOWN_FISCAL_QUARTER.to_string(),
        source: DATASET_ID.to_string(),
    })
}
