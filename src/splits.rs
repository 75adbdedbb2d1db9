//! Split selection strategies shared by dataset sources.
//!
//! Four strategies are in use: cumulative-fraction slicing of an ordered
//! pool, explicit file-per-split dispatch (with per-source alias tables),
//! split-column pools halved into disjoint val/test partitions, and a
//! seeded whole-table shuffle followed by fraction slicing.

use std::fmt;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::splits::{TRAIN_FRACTION, VAL_FRACTION};
use crate::errors::DatasetError;

/// Logical dataset partitions a caller can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Split {
    /// Training split.
    Train,
    /// Validation split.
    Val,
    /// Test split.
    Test,
}

impl Split {
    /// Canonical lowercase name used in file paths and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }

    /// Parse a split name, failing with a configuration error otherwise.
    pub fn from_name(name: &str) -> Result<Self, DatasetError> {
        match name {
            "train" => Ok(Split::Train),
            "val" => Ok(Split::Val),
            "test" => Ok(Split::Test),
            other => Err(DatasetError::UnknownSplit {
                dataset: String::new(),
                split: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative train/val fractions for slicing an ordered pool.
///
/// Test is always the remainder, so concatenating the three partitions
/// recovers the full pool with no row counted twice.
#[derive(Clone, Copy, Debug)]
pub struct SplitFractions {
    /// Fraction of the pool assigned to train.
    pub train: f64,
    /// Fraction assigned to validation, taken after the train slice.
    pub val: f64,
}

impl SplitFractions {
    /// Standard 80/10/10 partitioning.
    pub const EIGHTY_TEN_TEN: SplitFractions = SplitFractions {
        train: TRAIN_FRACTION,
        val: VAL_FRACTION,
    };

    /// Validate that the named fractions leave a non-negative test remainder.
    pub fn normalized(self) -> Result<Self, DatasetError> {
        let sum = self.train + self.val;
        if !(0.0..=1.0 + 1e-9).contains(&sum) || self.train < 0.0 || self.val < 0.0 {
            return Err(DatasetError::Parse {
                path: "<split fractions>".into(),
                reason: format!("fractions {:.3}/{:.3} exceed the pool", self.train, self.val),
            });
        }
        Ok(self)
    }
}

/// Slice one partition out of an ordered pool by cumulative fraction boundaries.
pub fn slice_split<T>(rows: Vec<T>, fractions: SplitFractions, split: Split) -> Vec<T> {
    let total = rows.len();
    let train_end = ((total as f64) * fractions.train).floor() as usize;
    let val_end = ((total as f64) * (fractions.train + fractions.val)).floor() as usize;
    let val_end = val_end.min(total);
    let mut rows = rows;
    match split {
        Split::Train => {
            rows.truncate(train_end);
            rows
        }
        Split::Val => rows.drain(train_end..val_end).collect(),
        Split::Test => rows.split_off(val_end),
    }
}

/// Shuffle a whole pool once with a fixed seed.
///
/// Identical seed and input order produce identical output across runs.
pub fn seeded_shuffle<T>(mut rows: Vec<T>, seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);
    rows
}

/// Halve a shared labeled pool into disjoint val/test partitions.
///
/// The pool is shuffled once with `seed`; val takes the first half and test
/// the remainder, so the two are disjoint and reproducible.
pub fn seeded_halves<T>(rows: Vec<T>, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut shuffled = seeded_shuffle(rows, seed);
    let half = shuffled.len() / 2;
    let test = shuffled.split_off(half);
    (shuffled, test)
}

/// Resolve a file-per-split path, failing with a configuration error when the
/// partition has no file on disk.
pub fn require_split_file(
    path: impl Into<PathBuf>,
    dataset: &str,
    split: Split,
) -> Result<PathBuf, DatasetError> {
    let path = path.into();
    if path.is_file() {
        Ok(path)
    } else {
        Err(DatasetError::UnknownSplit {
            dataset: dataset.to_string(),
            split: split.to_string(),
        })
    }
}

/// Helper for sources whose validation files use a different name.
pub fn aliased_split_name(split: Split, val_alias: &'static str) -> &'static str {
    match split {
        Split::Val => val_alias,
        other => other.as_str(),
    }
}
