use serde::Deserialize;

use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::read_csv_rows;
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::require_split_file;

#[derive(Debug, Deserialize)]
struct EzStanceRow {
    #[serde(rename = "Text")]
    text: String,
    #[serde(rename = "Target 1")]
    target: String,
    #[serde(rename = "Stance 1")]
    stance: String,
}

/// EZ-STANCE subtask A, filed per split under a noun-phrase or claim subdirectory.
pub struct EzStance {
    subtask_dir: &'static str,
}

impl EzStance {
    /// Noun-phrase targets variant, registered as `ezstance`.
    pub fn noun_phrase() -> Self {
        Self {
            subtask_dir: "noun_phrase",
        }
    }

    /// Claim targets variant, registered as `ezstance_claim`.
    pub fn claim() -> Self {
        Self {
            subtask_dir: "claim",
        }
    }
}

impl DatasetSource for EzStance {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let path = ctx
            .root
            .join("ezstance")
            .join("subtaskA")
            .join(self.subtask_dir)
            .join(format!("raw_{}_all_onecol.csv", ctx.options.split));
        let path = require_split_file(path, ctx.name, ctx.options.split)?;
        let rows = read_csv_rows::<EzStanceRow>(&path)?;
        Ok(rows
            .into_iter()
            .map(|row| StanceRow::new(row.text, row.target, Some(row.stance)))
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
            ("NONE", "neutral"),
        ]))
    }
}
