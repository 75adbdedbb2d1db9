#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Name-keyed loading of normalized stance datasets.
pub mod catalog;
/// Options controlling a load call.
pub mod config;
/// Shared constants for splits, threads, and individual sources.
pub mod constants;
/// Grouping of repeated judgements per document.
pub mod group;
/// Task vocabularies and strict label mapping.
pub mod labels;
/// Raw file readers.
pub mod read;
/// Canonical row and table types.
pub mod record;
/// Per-dataset source bundles and the name registry.
pub mod sources;
/// Split selection strategies.
pub mod splits;
/// Conversational-thread reconstruction.
pub mod thread;
/// Common type aliases.
pub mod types;
/// Text cleanup helpers.
pub mod utils;

mod errors;

pub use catalog::Catalog;
pub use config::LoadOptions;
pub use errors::DatasetError;
pub use labels::{LabelMapping, Task};
pub use record::{CanonicalRecord, DatasetTable, StanceRow};
pub use sources::{DatasetSource, LoadContext};
pub use splits::Split;
