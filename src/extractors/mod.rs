// src/extractors/mod.rs
pub mod record;
pub mod transcript;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use record::{PartitionFrame, RawRecord};
#[allow(unused_imports)]
pub use transcript::{normalize_record, FieldSpec};
