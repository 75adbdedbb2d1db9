use std::io;

use thiserror::Error;

use crate::types::{DatasetName, RawLabel};

/// Error type for catalog configuration, raw-file parsing, and label mapping failures.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The requested name matches no registered source.
    #[error("unknown dataset '{0}'")]
    UnknownDataset(DatasetName),
    /// The source has no files for the requested split.
    #[error("dataset '{dataset}' has no files for split '{split}'")]
    UnknownSplit {
        /// Requested dataset name.
        dataset: DatasetName,
        /// Requested split name.
        split: String,
    },
    /// The task name matches no known task.
    #[error("unknown task '{0}'")]
    UnknownTask(String),
    /// The source does not define the requested task granularity.
    #[error("dataset '{dataset}' does not support task '{task}'")]
    UnsupportedTask {
        /// Requested dataset name.
        dataset: DatasetName,
        /// Requested task name, or `none`.
        task: String,
    },
    /// An observed raw label falls outside the declared mapping domain.
    #[error("dataset '{dataset}': stance value '{value}' is not declared in the label mapping")]
    UnmappedLabel {
        /// Dataset whose mapping was violated.
        dataset: DatasetName,
        /// Offending raw value.
        value: RawLabel,
    },
    /// A raw file could not be parsed.
    #[error("failed parsing {path}: {reason}")]
    Parse {
        /// File that failed to parse.
        path: String,
        /// Underlying parser message.
        reason: String,
    },
    /// An underlying filesystem operation failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
