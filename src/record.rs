use serde::{Deserialize, Serialize};

pub use crate::types::{CanonicalLabel, DatasetName, DocumentText, RawLabel, TargetPhrase};

/// One stance judgement after per-source adaptation, before grouping.
///
/// `stance` holds the raw label until the strict mapping runs, the canonical
/// label afterwards. Unlabeled claim-extraction sources leave it `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StanceRow {
    /// Document whose stance is being judged.
    pub text: DocumentText,
    /// Target phrase or claim the stance is expressed toward.
    pub target: TargetPhrase,
    /// Stance label, raw before mapping and canonical after.
    pub stance: Option<RawLabel>,
    /// Ancestor texts, oldest first; `Some` only for conversational sources.
    pub parent_texts: Option<Vec<DocumentText>>,
    /// Shared background blurb; `Some` only for sources that define one.
    pub context: Option<String>,
}

impl StanceRow {
    /// Build a plain row with no conversational structure or context.
    pub fn new(
        text: impl Into<DocumentText>,
        target: impl Into<TargetPhrase>,
        stance: Option<RawLabel>,
    ) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
            stance,
            parent_texts: None,
            context: None,
        }
    }
}

/// Canonical output record common to every source.
///
/// `targets` and `stances` are positionally aligned; ungrouped loads produce
/// singletons, grouped loads produce one entry per distinct judgement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Document whose stance is being judged.
    pub text: DocumentText,
    /// Targets judged against this document, in first-observation order.
    pub targets: Vec<TargetPhrase>,
    /// Canonical stance values aligned with `targets`.
    pub stances: Vec<Option<CanonicalLabel>>,
    /// Literal name of the source this record came from.
    pub dataset: DatasetName,
    /// Ancestor texts, oldest ancestor first, immediate parent last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_texts: Option<Vec<DocumentText>>,
    /// Background blurb shared by every record of the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Output table for one load call, or the union-concatenation of several.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetTable {
    /// Canonical records in deterministic source order.
    pub records: Vec<CanonicalRecord>,
    /// Whether the `ParentTexts` column is part of this table's schema.
    pub has_parent_texts: bool,
    /// Whether the `Context` column is part of this table's schema.
    pub has_context: bool,
}

impl DatasetTable {
    /// Build a table from assembled records, deriving the optional-column flags.
    pub fn from_records(records: Vec<CanonicalRecord>) -> Self {
        let has_parent_texts = records.iter().any(|record| record.parent_texts.is_some());
        let has_context = records.iter().any(|record| record.context.is_some());
        Self {
            records,
            has_parent_texts,
            has_context,
        }
    }

    /// Fixed-order column set: the four mandatory columns plus the declared optionals.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["Text", "Target", "Stance", "Dataset"];
        if self.has_parent_texts {
            columns.push("ParentTexts");
        }
        if self.has_context {
            columns.push("Context");
        }
        columns
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Concatenate per-source tables with union-of-columns semantics.
    ///
    /// A source lacking an optional column contributes records whose field is
    /// `None`, which is the null padding for that column.
    pub fn concat(tables: impl IntoIterator<Item = DatasetTable>) -> Self {
        let mut records = Vec::new();
        let mut has_parent_texts = false;
        let mut has_context = false;
        for table in tables {
            has_parent_texts |= table.has_parent_texts;
            has_context |= table.has_context;
            records.extend(table.records);
        }
        Self {
            records,
            has_parent_texts,
            has_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dataset: &str, parent_texts: Option<Vec<String>>) -> CanonicalRecord {
        CanonicalRecord {
            text: "post".into(),
            targets: vec!["topic".into()],
            stances: vec![Some("favor".into())],
            dataset: dataset.into(),
            parent_texts,
            context: None,
        }
    }

    #[test]
    fn columns_follow_fixed_order_with_optionals_last() {
        let plain = DatasetTable::from_records(vec![record("a", None)]);
        assert_eq!(plain.columns(), vec!["Text", "Target", "Stance", "Dataset"]);

        let threaded = DatasetTable::from_records(vec![record("b", Some(vec![]))]);
        assert_eq!(
            threaded.columns(),
            vec!["Text", "Target", "Stance", "Dataset", "ParentTexts"]
        );
    }

    #[test]
    fn concat_unions_columns_and_null_pads() {
        let plain = DatasetTable::from_records(vec![record("a", None)]);
        let threaded = DatasetTable::from_records(vec![record("b", Some(vec!["root".into()]))]);

        let combined = DatasetTable::concat([plain, threaded]);
        assert!(combined.has_parent_texts);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.records[0].parent_texts, None);
        assert_eq!(
            combined.records[1].parent_texts.as_deref(),
            Some(&["root".to_string()][..])
        );
    }
}
