use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::{read_csv_rows, read_json_items, typed_items};
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::{aliased_split_name, require_split_file};
use crate::thread::{assemble_chain, exceeds_depth_bound, offsets_by_position};
use crate::types::PostId;

#[derive(Debug, Deserialize)]
struct TextRow {
    id: PostId,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ChainRow {
    /// Ids on the ancestor path, oldest first; the last id is the post itself.
    index: Vec<PostId>,
    stance: String,
}

/// MT-CSD multi-target conversational corpus.
///
/// Each target directory pairs an id-to-text table with per-split chain
/// files. Chains rank by list position, so a post's offset is its distance
/// from the end of its own `index` list. Threads deeper than the ancestor
/// bound are dropped whole.
pub struct Mtcsd;

impl DatasetSource for Mtcsd {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let data_dir = ctx.root.join("MT-CSD-main").join("data");
        let mut target_dirs = Vec::new();
        for entry in std::fs::read_dir(&data_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                target_dirs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        target_dirs.sort();

        let file_split = aliased_split_name(ctx.options.split, "valid");
        let mut rows = Vec::new();
        for target in &target_dirs {
            let dir = data_dir.join(target);
            let texts: HashMap<PostId, String> = read_csv_rows::<TextRow>(&dir.join("text.csv"))?
                .into_iter()
                .map(|row| (row.id, row.text))
                .collect();

            let chain_path =
                require_split_file(dir.join(format!("{file_split}.json")), ctx.name, ctx.options.split)?;
            let chains: Vec<ChainRow> = typed_items(&chain_path, read_json_items(&chain_path)?)?;

            for chain in chains {
                let offsets = offsets_by_position(&chain.index);
                if exceeds_depth_bound(&offsets) {
                    warn!(
                        dataset = ctx.name,
                        topic = %target,
                        depth = chain.index.len(),
                        "dropping over-deep thread"
                    );
                    continue;
                }
                let Some(assembled) =
                    assemble_chain(&chain.index, &offsets, |id| texts.get(&id).cloned())
                else {
                    continue;
                };
                let mut row = StanceRow::new(assembled.text, target.clone(), Some(chain.stance));
                row.parent_texts = Some(assembled.parent_texts);
                rows.push(row);
            }
        }
        Ok(rows)
    }

    fn label_mapping(
        &self,
        _ctx: &LoadContext<'_>,
        _rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        Ok(LabelMapping::from_pairs([
            ("favor", "favor"),
            ("against", "against"),
            ("none", "neutral"),
        ]))
    }
}
