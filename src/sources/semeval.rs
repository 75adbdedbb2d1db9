use serde::Deserialize;

use crate::constants::splits::{TRAIN_FILE_VAL_FRACTION, TRAIN_FRACTION};
use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::read_csv_rows;
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::{Split, SplitFractions, require_split_file, slice_split};

#[derive(Debug, Deserialize)]
struct SemevalRow {
    #[serde(rename = "Tweet")]
    tweet: String,
    #[serde(rename = "Target")]
    target: String,
    #[serde(rename = "Stance")]
    stance: String,
}

/// SemEval tweet-stance corpus: a filed test partition plus a train file
/// re-split head/tail into train and val.
pub struct Semeval;

impl DatasetSource for Semeval {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let dir = ctx.root.join("semeval");
        let rows = match ctx.options.split {
            Split::Test => {
                let path =
                    require_split_file(dir.join("semeval_test.csv"), ctx.name, ctx.options.split)?;
                read_csv_rows::<SemevalRow>(&path)?
            }
            Split::Train | Split::Val => {
                let path =
                    require_split_file(dir.join("semeval_train.csv"), ctx.name, ctx.options.split)?;
                let pool = read_csv_rows::<SemevalRow>(&path)?;
                let fractions = SplitFractions {
                    train: TRAIN_FRACTION,
                    val: TRAIN_FILE_VAL_FRACTION,
                }
                .normalized()?;
                slice_split(pool, fractions, ctx.options.split)
            }
        };
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
            ("NONE", "neutral"),
        ]))
    }
}
