//! Columnar snapshot sources exported from internal annotation runs.

use std::path::Path;

use serde_json::{Map, Value};

use crate::constants::sources::KIRK_CONTEXT;
use crate::errors::DatasetError;
use crate::labels::{LabelMapping, Task, vocab};
use crate::read::read_parquet_rows;
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::{SplitFractions, require_split_file, slice_split};

const CONSPIRACIES_FILE: &str = "df_tagged_claim_sim_sample_15k_for_tagging.parquet.zstd";
const KIRK_FILE: &str =
    "df_entailment_4da257ab_claude_tagging_threshold_0_7_claims_added_to_text_False_with_entailment.parquet.zstd";

fn require_str(object: &Map<String, Value>, path: &Path, column: &str) -> Result<String, DatasetError> {
    object
        .get(column)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DatasetError::Parse {
            path: path.display().to_string(),
            reason: format!("missing or non-string column '{column}'"),
        })
}

fn read_snapshot(
    ctx: &LoadContext<'_>,
    file: &str,
    text_column: &str,
    target_column: &str,
) -> Result<Vec<StanceRow>, DatasetError> {
    let path = require_split_file(ctx.root.join(file), ctx.name, ctx.options.split)?;
    let objects = read_parquet_rows(&path)?;
    let mut rows = Vec::new();
    for object in &objects {
        rows.push(StanceRow::new(
            require_str(object, &path, text_column)?,
            require_str(object, &path, target_column)?,
            Some(require_str(object, &path, "stance")?),
        ));
    }
    Ok(slice_split(rows, SplitFractions::EIGHTY_TEN_TEN, ctx.options.split))
}

/// Conspiracy-claim tagging snapshot with a four-way native vocabulary.
///
/// Only the two- and four-way claim-entailment tasks are meaningful here.
pub struct Conspiracies;

impl DatasetSource for Conspiracies {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        read_snapshot(ctx, CONSPIRACIES_FILE, "text", "target")
    }

    fn label_mapping(
        &self,
        ctx: &LoadContext<'_>,
        _rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        match ctx.options.task {
            Some(Task::ClaimEntailment2Way) => Ok(LabelMapping::from_pairs([
                ("supporting", "supporting"),
                ("refuting", "other"),
                ("irrelevant", "other"),
                ("discussing", "other"),
            ])),
            Some(Task::ClaimEntailment4Way) => Ok(LabelMapping::from_pairs(
                vocab::CLAIM_ENTAILMENT_4WAY.map(|value| (value, value)),
            )),
            task => Err(DatasetError::UnsupportedTask {
                dataset: ctx.name.to_string(),
                task: Task::describe(task),
            }),
        }
    }
}

/// Entailment-tagging snapshot around the Kirk assassination.
///
/// Every record carries the event summary as `Context`. The native
/// vocabulary includes leaning and neutral values, so coarser tasks fold
/// those away and the remainder is declared from the observed values.
pub struct Kirk;

impl DatasetSource for Kirk {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let mut rows = read_snapshot(ctx, KIRK_FILE, "Text", "MainClaims")?;
        for row in &mut rows {
            row.context = Some(KIRK_CONTEXT.to_string());
        }
        Ok(rows)
    }

    fn label_mapping(
        &self,
        ctx: &LoadContext<'_>,
        rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        let mut mapping = match ctx.options.task {
            Some(Task::ClaimEntailment5Way) => LabelMapping::from_pairs([
                ("leaning refuting", "discussing"),
                ("leaning supporting", "discussing"),
                ("neutral", "discussing"),
            ]),
            Some(Task::ClaimEntailment4Way) => LabelMapping::from_pairs([
                ("leaning refuting", "discussing"),
                ("leaning supporting", "discussing"),
                ("neutral", "discussing"),
                ("querying", "discussing"),
            ]),
            Some(Task::ClaimEntailment2Way) => LabelMapping::from_pairs([
                ("supporting", "supporting"),
                ("leaning supporting", "supporting"),
                ("refuting", "other"),
                ("leaning refuting", "other"),
                ("irrelevant", "other"),
                ("discussing", "other"),
                ("querying", "other"),
                ("neutral", "other"),
            ]),
            task => {
                return Err(DatasetError::UnsupportedTask {
                    dataset: ctx.name.to_string(),
                    task: Task::describe(task),
                });
            }
        };
        mapping.fill_identity_lowercase(rows);
        Ok(mapping)
    }
}
