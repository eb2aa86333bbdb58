// src/extractors/record.rs

// --- Imports ---
use crate::utils::error::FetchError;
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

// --- Data Structures ---

/// One row of a partition, keyed by lowercase column name.
///
/// Null cells are absent, so a lookup cannot tell "missing column" from
/// "null value". Normalization treats both the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord<'a> {
    fields: HashMap<&'a str, &'a str>,
}

impl<'a> RawRecord<'a> {
    #[cfg(test)]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self { fields: pairs.into_iter().collect() }
    }

    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.fields.get(field).copied()
    }
}

/// Text view over the columns of a loaded partition.
///
/// Column names are case-folded and only the requested columns are kept,
/// each cast to text so dates and numbers arrive as their display form.
pub struct PartitionFrame {
    columns: Vec<(String, StringChunked)>,
    height: usize,
}

impl PartitionFrame {
    pub fn from_dataframe(df: &DataFrame, wanted: &[&str]) -> Result<Self, FetchError> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();

        for column in df.get_columns() {
            let name = column.name().as_str().to_lowercase();
            if !seen.insert(name.clone()) {
                return Err(FetchError::Schema(format!(
                    "duplicate column '{}' after lowercasing names",
                    name
                )));
            }
            if !wanted.contains(&name.as_str()) {
                continue;
            }

            let text = column.cast(&DataType::String)?;
            columns.push((name, text.str()?.clone()));
        }

        tracing::trace!(
            "Partition frame keeps {} of {} columns",
            columns.len(),
            df.width()
        );

        Ok(Self { columns, height: df.height() })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = RawRecord<'_>> + '_ {
        (0..self.height).map(move |idx| RawRecord {
            fields: self
                .columns
                .iter()
                .filter_map(|(name, values)| values.get(idx).map(|value| (name.as_str(), value)))
                .collect(),
        })
    }
}
