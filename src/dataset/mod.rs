// src/dataset/mod.rs
pub mod client;
pub mod models;

#[allow(unused_imports)]
pub use client::{HttpPartitionSource, PartitionSource};
