use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::constants::sources::CTSDT_TARGET;
use crate::constants::splits::SHUFFLE_SEED;
use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::read_csv_rows;
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::{SplitFractions, require_split_file, seeded_shuffle, slice_split};
use crate::thread::{assemble_chain, exceeds_depth_bound, offsets_by_id};
use crate::types::PostId;

#[derive(Debug, Deserialize)]
struct CtsdtRow {
    id: PostId,
    text: String,
    label: String,
    #[serde(default)]
    sub_branch: Option<String>,
}

/// Parse a serialized id list like `['123', '456']`.
///
/// A missing or empty list means the post is its own whole branch.
fn parse_branch(
    path: &Path,
    id: PostId,
    sub_branch: Option<&str>,
) -> Result<Vec<PostId>, DatasetError> {
    let Some(raw) = sub_branch else {
        return Ok(vec![id]);
    };
    let inner = raw.trim().trim_start_matches('[').trim_end_matches(']').trim();
    if inner.is_empty() {
        return Ok(vec![id]);
    }
    inner
        .split(", ")
        .map(|piece| {
            piece
                .trim_matches('\'')
                .parse::<PostId>()
                .map_err(|err| DatasetError::Parse {
                    path: path.display().to_string(),
                    reason: format!("bad id '{piece}' in sub_branch: {err}"),
                })
        })
        .collect()
}

/// CTSDT COVID-vaccination thread corpus, one labeled file for all splits.
///
/// The file is shuffled once with a fixed seed and sliced 80/10/10. Branch
/// ids rank by value, so the largest id on a branch is the post itself.
/// Ancestor texts resolve against the sliced partition only, and threads
/// deeper than the ancestor bound are dropped whole.
pub struct Ctsdt;

impl DatasetSource for Ctsdt {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let path = require_split_file(
            ctx.root.join("CTSDT").join("labeled_data.csv"),
            ctx.name,
            ctx.options.split,
        )?;
        let pool = read_csv_rows::<CtsdtRow>(&path)?;
        let shuffled = seeded_shuffle(pool, SHUFFLE_SEED);
        let selected = slice_split(shuffled, SplitFractions::EIGHTY_TEN_TEN, ctx.options.split);

        let texts: HashMap<PostId, String> = selected
            .iter()
            .map(|row| (row.id, row.text.clone()))
            .collect();

        let mut rows = Vec::new();
        for row in &selected {
            let ancestry = parse_branch(&path, row.id, row.sub_branch.as_deref())?;
            let offsets = offsets_by_id(&ancestry);
            if exceeds_depth_bound(&offsets) {
                warn!(dataset = ctx.name, id = row.id, "dropping over-deep thread");
                continue;
            }
            let Some(assembled) = assemble_chain(&ancestry, &offsets, |id| texts.get(&id).cloned())
            else {
                continue;
            };
            let mut out = StanceRow::new(assembled.text, CTSDT_TARGET, Some(row.label.clone()));
            out.parent_texts = Some(assembled.parent_texts);
            rows.push(out);
        }
        Ok(rows)
    }

    fn label_mapping(
        &self,
        _ctx: &LoadContext<'_>,
        _rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        Ok(LabelMapping::from_pairs([
            ("FAVOR", "favor"),
            ("AGAINST", "against"),
            ("NEITHER", "neutral"),
        ]))
    }
}
