use std::io;

use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::constants::sources::{STANCEOSAURUS_MASKED_FILENAME, STANCEOSAURUS_PRESPLIT_LANGUAGE};
use crate::constants::thread::MAX_ANCESTOR_OFFSET;
use crate::errors::DatasetError;
use crate::labels::{LabelMapping, Task};
use crate::read::{read_json_items, typed_items};
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::{SplitFractions, aliased_split_name, slice_split};
use crate::thread::{FlatPost, ThreadPost, flatten_reply_tree};
use crate::utils::clean_label;

#[derive(Debug, Deserialize)]
struct ThreadDoc {
    claim: String,
    root_tweet: ThreadPost,
}

/// Rewrite a native five-way annotation to the requested task granularity.
///
/// The five-way vocabulary is the corpus's own; coarser tasks merge classes
/// and the seven-way task synthesizes labels from the leaning annotation.
fn rewrite_stance(task: Task, stance: String, leaning: Option<&str>) -> String {
    match task {
        Task::ClaimEntailment2Way => {
            if stance == "Supporting" || leaning == Some("Supporting") {
                "Supporting".to_string()
            } else {
                "Other".to_string()
            }
        }
        Task::ClaimEntailment3Way => {
            if stance == "Supporting" || stance == "Refuting" {
                stance
            } else {
                "Neutral".to_string()
            }
        }
        Task::ClaimEntailment4Way => {
            if stance == "Querying" {
                "Discussing".to_string()
            } else {
                stance
            }
        }
        Task::ClaimEntailment5Way => stance,
        Task::ClaimEntailment7Way => match leaning {
            Some(leaning @ ("Refuting" | "Supporting")) => format!("Leaning {leaning}"),
            _ => stance,
        },
    }
}

/// Stanceosaurus misinformation-claim reply trees across several languages.
///
/// English files are pre-partitioned into split directories (`val` filed as
/// `dev`); every other language ships unsplit and is sliced 80/10/10 after
/// flattening. Hindi carries its annotations in the leaning field. Posts
/// deeper than the ancestor bound are dropped. A task is required; the
/// vocabulary it produces is declared from the rewritten values themselves.
pub struct Stanceosaurus;

impl DatasetSource for Stanceosaurus {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let Some(task) = ctx.options.task else {
            return Err(DatasetError::UnsupportedTask {
                dataset: ctx.name.to_string(),
                task: Task::describe(None),
            });
        };

        let base = ctx.root.join("stanceosaurus");
        let mut languages = Vec::new();
        for entry in std::fs::read_dir(&base)? {
            let entry = entry?;
            if entry.path().is_dir() {
                languages.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        languages.sort();

        let split_dir = aliased_split_name(ctx.options.split, "dev");
        let max_chain_len = (-MAX_ANCESTOR_OFFSET) as usize;
        let mut rows = Vec::new();
        for language in &languages {
            let presplit = language == STANCEOSAURUS_PRESPLIT_LANGUAGE;
            let mut posts: Vec<FlatPost> = Vec::new();
            for entry in WalkDir::new(base.join(language)).sort_by_file_name() {
                let entry = entry.map_err(io::Error::from)?;
                let path = entry.path();
                if !entry.file_type().is_file()
                    || !matches!(
                        path.extension().and_then(|ext| ext.to_str()),
                        Some("json" | "jsonl")
                    )
                {
                    continue;
                }
                if entry.file_name() == STANCEOSAURUS_MASKED_FILENAME {
                    debug!(path = %path.display(), "skipping annotation export");
                    continue;
                }
                if presplit
                    && !path
                        .components()
                        .any(|component| component.as_os_str() == split_dir)
                {
                    continue;
                }
                let docs: Vec<ThreadDoc> = typed_items(path, read_json_items(path)?)?;
                for doc in &docs {
                    posts.extend(flatten_reply_tree(&doc.claim, &doc.root_tweet));
                }
            }

            posts.retain(|post| {
                if post.ancestor_texts.len() > max_chain_len {
                    warn!(
                        dataset = ctx.name,
                        language = %language,
                        depth = post.ancestor_texts.len(),
                        "dropping over-deep post"
                    );
                    false
                } else {
                    true
                }
            });

            if language == "hindi" {
                // Hindi annotations live in the leaning field; posts the
                // annotators only marked as discussing carry no stance. The
                // field moves rather than copies, so no leaning survives for
                // the seven-way task to synthesize labels from.
                posts.retain(|post| {
                    post.leaning.as_deref().is_some_and(|leaning| leaning != "Discussing")
                });
                for post in &mut posts {
                    post.stance = post.leaning.take();
                }
            }

            if !presplit {
                posts = slice_split(posts, SplitFractions::EIGHTY_TEN_TEN, ctx.options.split);
            }

            for post in posts {
                let Some(stance) = post.stance else {
                    continue;
                };
                let stance = clean_label(&stance);
                let stance = rewrite_stance(task, stance, post.leaning.as_deref());
                let mut row = StanceRow::new(post.text, post.claim, Some(stance));
                row.parent_texts = Some(post.ancestor_texts);
                rows.push(row);
            }
        }
        Ok(rows)
    }

    fn label_mapping(
        &self,
        _ctx: &LoadContext<'_>,
        rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        Ok(LabelMapping::identity_lowercase(rows))
    }
}
