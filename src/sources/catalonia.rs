use serde::Deserialize;

use crate::constants::sources::CATALONIA_TARGET;
use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::read_delimited_rows;
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::require_split_file;

/// Per-language tab-delimited files concatenated per partition.
const LANGUAGE_FILES: [&str; 2] = ["spanish", "catalan"];

#[derive(Debug, Deserialize)]
struct CataloniaRow {
    // The raw files also carry a numeric-looking `id_str` column typed as a
    // string; it is not part of the canonical schema and is never read.
    #[serde(rename = "TWEET")]
    tweet: String,
    #[serde(rename = "LABEL")]
    label: String,
}

/// Catalonia-independence referendum corpus with a single fixed target.
pub struct Catalonia;

impl DatasetSource for Catalonia {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let dir = ctx.root.join("catalonia");
        let mut rows = Vec::new();
        for language in LANGUAGE_FILES {
            let path = dir.join(format!("{language}_{}.csv", ctx.options.split));
            let path = require_split_file(path, ctx.name, ctx.options.split)?;
            rows.extend(read_delimited_rows::<CataloniaRow>(&path, b'\t')?);
        }
        Ok(rows
            .into_iter()
            .map(|row| StanceRow::new(row.tweet, CATALONIA_TARGET, Some(row.label)))
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
            ("NEUTRAL", "neutral"),
        ]))
    }
}
