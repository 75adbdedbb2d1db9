//! Task vocabularies and the strict raw-label to canonical-label mapping.

use indexmap::IndexMap;

use crate::errors::DatasetError;
use crate::record::StanceRow;
use crate::types::{CanonicalLabel, RawLabel};

/// Canonical stance vocabularies referenced by mapping tables.
pub mod vocab {
    /// Four-way claim-entailment vocabulary.
    pub const CLAIM_ENTAILMENT_4WAY: [&str; 4] =
        ["supporting", "refuting", "irrelevant", "discussing"];
}

/// Task granularity requested by the caller for task-conditioned sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// Supporting vs. everything else.
    ClaimEntailment2Way,
    /// Supporting / refuting / neutral.
    ClaimEntailment3Way,
    /// Supporting / refuting / irrelevant / discussing.
    ClaimEntailment4Way,
    /// The source's native five-way vocabulary, lower-cased.
    ClaimEntailment5Way,
    /// Native vocabulary extended with synthesized leaning labels.
    ClaimEntailment7Way,
}

impl Task {
    /// Canonical task name as callers spell it.
    pub fn as_str(self) -> &'static str {
        match self {
            Task::ClaimEntailment2Way => "claim-entailment-2way",
            Task::ClaimEntailment3Way => "claim-entailment-3way",
            Task::ClaimEntailment4Way => "claim-entailment-4way",
            Task::ClaimEntailment5Way => "claim-entailment-5way",
            Task::ClaimEntailment7Way => "claim-entailment-7way",
        }
    }

    /// Parse a task name, failing with a configuration error otherwise.
    pub fn from_name(name: &str) -> Result<Self, DatasetError> {
        match name {
            "claim-entailment-2way" => Ok(Task::ClaimEntailment2Way),
            "claim-entailment-3way" => Ok(Task::ClaimEntailment3Way),
            "claim-entailment-4way" => Ok(Task::ClaimEntailment4Way),
            "claim-entailment-5way" => Ok(Task::ClaimEntailment5Way),
            "claim-entailment-7way" => Ok(Task::ClaimEntailment7Way),
            other => Err(DatasetError::UnknownTask(other.to_string())),
        }
    }

    /// Render an optional task for error messages.
    pub(crate) fn describe(task: Option<Task>) -> String {
        task.map(|task| task.as_str().to_string())
            .unwrap_or_else(|| "none".to_string())
    }
}

/// Strict, total mapping from raw label vocabulary to canonical vocabulary.
///
/// Totality is verified against the value set actually observed in the loaded
/// partition; any observed value outside the declared domain is a hard
/// failure, never a pass-through.
#[derive(Clone, Debug, Default)]
pub struct LabelMapping {
    entries: IndexMap<RawLabel, CanonicalLabel>,
}

impl LabelMapping {
    /// Mapping for sources that carry no stance labels at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a mapping from a hand-authored table.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
            .collect();
        Self { entries }
    }

    /// Identity-after-lowercasing mapping over the observed raw values.
    ///
    /// Used when the source's native label set already matches the task
    /// granularity, so the vocabulary is declared from the data itself.
    pub fn identity_lowercase(rows: &[StanceRow]) -> Self {
        let mut mapping = Self::empty();
        mapping.fill_identity_lowercase(rows);
        mapping
    }

    /// Add identity-lowercase entries for observed values not already declared.
    pub fn fill_identity_lowercase(&mut self, rows: &[StanceRow]) {
        for row in rows {
            if let Some(raw) = &row.stance
                && !self.entries.contains_key(raw)
            {
                self.entries.insert(raw.clone(), raw.to_lowercase());
            }
        }
    }

    /// Declared canonical values, in declaration order.
    pub fn canonical_values(&self) -> impl Iterator<Item = &CanonicalLabel> {
        self.entries.values()
    }

    /// Verify totality over `rows`, then replace every stance value in place.
    pub fn apply(&self, dataset: &str, rows: &mut [StanceRow]) -> Result<(), DatasetError> {
        self.validate(dataset, rows)?;
        for row in rows.iter_mut() {
            if let Some(raw) = row.stance.take() {
                // validate() guarantees the lookup succeeds
                row.stance = self.entries.get(&raw).cloned();
            }
        }
        Ok(())
    }

    /// Confirm the observed raw value set is a subset of the mapping domain.
    pub fn validate(&self, dataset: &str, rows: &[StanceRow]) -> Result<(), DatasetError> {
        for row in rows {
            if let Some(raw) = &row.stance
                && !self.entries.contains_key(raw)
            {
                return Err(DatasetError::UnmappedLabel {
                    dataset: dataset.to_string(),
                    value: raw.clone(),
                });
            }
        }
        Ok(())
    }
}
