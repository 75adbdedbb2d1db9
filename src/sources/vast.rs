use serde::Deserialize;

use crate::constants::sources::VAST_SYNTHETIC_NEUTRAL_TYPE_IDX;
use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::read_csv_rows;
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::{aliased_split_name, require_split_file};

#[derive(Debug, Deserialize)]
struct VastRow {
    post: String,
    topic_str: String,
    label: i64,
    #[serde(default)]
    type_idx: Option<i64>,
}

/// VAST zero/few-shot stance family: any dataset name containing `vast`.
///
/// Splits are filed per partition with `val` filed as `dev`. Synthetic
/// neutral rows are flagged by `type_idx` and dropped on request.
pub struct Vast;

impl DatasetSource for Vast {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let file_split = aliased_split_name(ctx.options.split, "dev");
        let path = ctx
            .root
            .join(ctx.name)
            .join(format!("{}_{file_split}.csv", ctx.name));
        let path = require_split_file(path, ctx.name, ctx.options.split)?;
        let rows = read_csv_rows::<VastRow>(&path)?;
        Ok(rows
            .into_iter()
            .filter(|row| {
                !(ctx.options.remove_synthetic_neutral
                    && row.type_idx == Some(VAST_SYNTHETIC_NEUTRAL_TYPE_IDX))
            })
            .map(|row| StanceRow::new(row.post, row.topic_str, Some(row.label.to_string())))
            .collect())
    }

    fn label_mapping(
        &self,
        _ctx: &LoadContext<'_>,
        _rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        Ok(LabelMapping::from_pairs([
            ("0", "against"),
            ("1", "favor"),
            ("2", "neutral"),
        ]))
    }
}
