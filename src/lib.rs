#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Singly-linked record chains and their structural operations.
pub mod chain;
/// Centralized constants used across the engine and demo runners.
pub mod constants;
/// Labeled record types consumed by the chain builder.
pub mod data;
/// Bundled country population dataset.
pub mod dataset;
/// Reusable demo runners shared by the bundled binaries.
pub mod example_apps;
/// Aggregate statistics helpers.
pub mod metrics;
/// Descending merge sort over chains.
pub mod sort;
/// Shared type aliases.
pub mod types;

mod errors;

pub use chain::{Chain, IntoRecords, Records};
pub use data::Record;
pub use errors::ChainError;
pub use metrics::{value_summary, ValueSummary};
pub use sort::{merge, merge_sort, par_merge_sort};
pub use types::{Label, Value};
