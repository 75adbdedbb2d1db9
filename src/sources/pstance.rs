use serde::Deserialize;

use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::read_csv_rows;
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::require_split_file;

/// Political figures covered by the corpus, one file per figure per split.
const PSTANCE_TARGETS: [&str; 3] = ["bernie", "biden", "trump"];

#[derive(Debug, Deserialize)]
struct PStanceRow {
    #[serde(rename = "Tweet")]
    tweet: String,
    #[serde(rename = "Target")]
    target: String,
    #[serde(rename = "Stance")]
    stance: String,
}

/// P-Stance corpus: per-figure split files concatenated per partition.
///
/// The corpus carries no neutral class, so the mapping declares two values.
pub struct PStance;

impl DatasetSource for PStance {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let dir = ctx.root.join("PStance");
        let mut rows = Vec::new();
        for figure in PSTANCE_TARGETS {
            let path = dir.join(format!("raw_{}_{figure}.csv", ctx.options.split));
            let path = require_split_file(path, ctx.name, ctx.options.split)?;
            rows.extend(read_csv_rows::<PStanceRow>(&path)?);
        }
        Ok(rows
            .into_iter()
            .map(|row| StanceRow::new(row.tweet, row.target, Some(row.stance)))
            .collect())
    }

    fn label_mapping(
        &self,
        _ctx: &LoadContext<'_>,
        _rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        Ok(LabelMapping::from_pairs([
            ("FAVOR", "favor"),
            ("AGAINST", "against"),
        ]))
    }
}
