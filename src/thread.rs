//! Conversational-thread reconstruction.
//!
//! Two raw structures are handled: explicit reply trees with recursive
//! `children` lists, and index-based ancestor chains where each post names
//! the ids on its ancestor path. Both flatten into one row per post carrying
//! an ordered ancestor-text sequence, oldest ancestor first.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::constants::thread::{LEAF_TEXT_COLUMN, MAX_ANCESTOR_OFFSET, TEXT_COLUMN_PREFIX};
use crate::types::{ColumnName, DocumentText, PostId};

/// One post in a nested reply tree, as serialized by tree-shaped sources.
#[derive(Clone, Debug, Deserialize)]
pub struct ThreadPost {
    /// Post text.
    pub text: DocumentText,
    /// Primary stance annotation, when present.
    #[serde(default)]
    pub stance: Option<String>,
    /// Secondary leaning annotation, when present.
    #[serde(default)]
    pub leaning: Option<String>,
    /// Direct replies to this post.
    #[serde(default)]
    pub children: Vec<ThreadPost>,
}

/// A post flattened out of a reply tree with its full ancestor chain.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatPost {
    /// Post text.
    pub text: DocumentText,
    /// Primary stance annotation.
    pub stance: Option<String>,
    /// Secondary leaning annotation.
    pub leaning: Option<String>,
    /// Claim the whole thread is annotated against.
    pub claim: String,
    /// Ancestor texts from the thread root down to the immediate parent.
    pub ancestor_texts: Vec<DocumentText>,
}

/// Flatten a reply tree into one post per node.
///
/// Every node is emitted, the root included with an empty chain. Chains are
/// built fresh per node; nothing in the input tree is mutated or shared
/// between sibling branches.
pub fn flatten_reply_tree(claim: &str, root: &ThreadPost) -> Vec<FlatPost> {
    let mut posts = Vec::new();
    emit_subtree(claim, root, &[], &mut posts);
    posts
}

fn emit_subtree(claim: &str, node: &ThreadPost, chain: &[DocumentText], out: &mut Vec<FlatPost>) {
    out.push(FlatPost {
        text: node.text.clone(),
        stance: node.stance.clone(),
        leaning: node.leaning.clone(),
        claim: claim.to_string(),
        ancestor_texts: chain.to_vec(),
    });
    let mut child_chain = Vec::with_capacity(chain.len() + 1);
    child_chain.extend_from_slice(chain);
    child_chain.push(node.text.clone());
    for child in &node.children {
        emit_subtree(claim, child, &child_chain, out);
    }
}

/// Zero-from-leaf offsets for an ancestor path ranked by list position.
///
/// The last listed id is the post itself (offset `0`); earlier ids get
/// successively more negative offsets.
pub fn offsets_by_position(ancestry: &[PostId]) -> Vec<i64> {
    let len = ancestry.len() as i64;
    (0..len).map(|position| position - len + 1).collect()
}

/// Zero-from-leaf offsets computed as `1 - dense_rank_desc(id)` over the path.
///
/// Assumes ids grow over time, so the largest id on the path is the post
/// itself. A single-element path (a post standing in as its own ancestor
/// placeholder) always resolves to offset `0`.
pub fn offsets_by_id(ancestry: &[PostId]) -> Vec<i64> {
    let mut distinct = ancestry.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    ancestry
        .iter()
        .map(|id| {
            let larger = distinct.iter().filter(|value| *value > id).count() as i64;
            // dense rank descending is larger + 1, so the offset is -larger
            -larger
        })
        .collect()
}

/// Whether any offset on the path falls below the configured depth bound.
///
/// Such threads are dropped entirely rather than truncated.
pub fn exceeds_depth_bound(offsets: &[i64]) -> bool {
    offsets.iter().any(|offset| *offset < MAX_ANCESTOR_OFFSET)
}

/// Pivot one post's ancestor path into named text cells.
///
/// Cell keys are `text_{offset}` column names; an id the text lookup cannot
/// resolve pivots to a null cell. The first occurrence wins when duplicate
/// ids produce the same offset.
pub fn pivot_chain(
    ancestry: &[PostId],
    offsets: &[i64],
    mut text_of: impl FnMut(PostId) -> Option<DocumentText>,
) -> BTreeMap<ColumnName, Option<DocumentText>> {
    let mut cells = BTreeMap::new();
    for (id, offset) in ancestry.iter().zip(offsets) {
        cells
            .entry(format!("{TEXT_COLUMN_PREFIX}{offset}"))
            .or_insert_with(|| text_of(*id));
    }
    cells
}

/// Assemble `ParentTexts` from pivoted cells.
///
/// Non-leaf column names are sorted descending lexicographically, then null
/// cells are dropped. The string sort is deliberately preserved behavior from
/// the pivot this reimplements; its exact output is pinned by tests rather
/// than replaced with a numeric ordering.
pub fn parent_texts_from_pivot(
    cells: &BTreeMap<ColumnName, Option<DocumentText>>,
) -> Vec<DocumentText> {
    let mut names: Vec<&ColumnName> = cells
        .keys()
        .filter(|name| name.as_str() != LEAF_TEXT_COLUMN)
        .collect();
    names.sort_by(|a, b| b.cmp(a));
    names
        .into_iter()
        .filter_map(|name| cells[name].clone())
        .collect()
}

/// A fully assembled chain post: leaf text plus its ordered ancestor texts.
#[derive(Clone, Debug, PartialEq)]
pub struct AssembledChain {
    /// Text of the leaf post itself.
    pub text: DocumentText,
    /// Ancestor texts assembled via [`parent_texts_from_pivot`].
    pub parent_texts: Vec<DocumentText>,
}

/// Pivot and assemble one post's chain in a single step.
///
/// Returns `None` when the leaf text itself cannot be resolved, matching the
/// inner-join the original pivot performed on the leaf row.
pub fn assemble_chain(
    ancestry: &[PostId],
    offsets: &[i64],
    text_of: impl FnMut(PostId) -> Option<DocumentText>,
) -> Option<AssembledChain> {
    let cells = pivot_chain(ancestry, offsets, text_of);
    let text = cells.get(LEAF_TEXT_COLUMN)?.clone()?;
    let parent_texts = parent_texts_from_pivot(&cells);
    Some(AssembledChain { text, parent_texts })
}
