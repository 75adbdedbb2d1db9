//! Post-normalization grouping of repeated judgements per document.

use indexmap::{IndexMap, IndexSet};

use crate::record::StanceRow;
use crate::types::{CanonicalLabel, DocumentText, TargetPhrase};

/// One document key with its aligned target/stance sequences.
///
/// Produced by [`collapse`] (list-valued) or [`singletons`] (one judgement
/// per entry); the catalog turns these into canonical records.
#[derive(Clone, Debug, PartialEq)]
pub struct StanceGroup {
    /// Document text.
    pub text: DocumentText,
    /// Distinct targets observed for the key, first-observation order.
    pub targets: Vec<TargetPhrase>,
    /// Stance values aligned with `targets`.
    pub stances: Vec<Option<CanonicalLabel>>,
    /// Ancestor texts carried from the rows.
    pub parent_texts: Option<Vec<DocumentText>>,
    /// Context carried from the rows.
    pub context: Option<String>,
}

/// Collapse rows sharing a document key into list-valued groups.
///
/// The key is `(ParentTexts, Text)` when the source carries conversational
/// structure, else `Text` alone (absent `ParentTexts` makes the two
/// equivalent). Exact duplicate `(key, Target, Stance)` rows are removed
/// first, so a judgement appearing twice collapses to one entry while
/// distinct pairs are preserved.
pub fn collapse(rows: Vec<StanceRow>) -> Vec<StanceGroup> {
    let mut seen: IndexSet<StanceRow> = IndexSet::with_capacity(rows.len());
    for row in rows {
        seen.insert(row);
    }

    let mut groups: IndexMap<(Option<Vec<DocumentText>>, DocumentText), StanceGroup> =
        IndexMap::new();
    for row in seen {
        let key = (row.parent_texts.clone(), row.text.clone());
        let group = groups.entry(key).or_insert_with(|| StanceGroup {
            text: row.text.clone(),
            targets: Vec::new(),
            stances: Vec::new(),
            parent_texts: row.parent_texts.clone(),
            context: row.context.clone(),
        });
        group.targets.push(row.target);
        group.stances.push(row.stance);
    }
    groups.into_values().collect()
}

/// Pass rows through ungrouped, one singleton group per judgement.
pub fn singletons(rows: Vec<StanceRow>) -> Vec<StanceGroup> {
    rows.into_iter()
        .map(|row| StanceGroup {
            text: row.text,
            targets: vec![row.target],
            stances: vec![row.stance],
            parent_texts: row.parent_texts,
            context: row.context,
        })
        .collect()
}
