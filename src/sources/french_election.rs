use serde::Deserialize;

use crate::constants::sources::{FRENCH_ELECTION_TEST_SET, FRENCH_ELECTION_TRAIN_SET};
use crate::constants::splits::POOL_HALVING_SEED;
use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::read_csv_rows;
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::{Split, require_split_file, seeded_halves};

/// Per-target files and the target phrase each one carries.
const TARGET_FILES: [(&str, &str); 3] = [
    ("lepen_fr", "Marine Le Pen"),
    ("macron_fr", "Emmanuel Macron"),
    ("referendum_it", "Constitutional Referendum"),
];

#[derive(Debug, Deserialize)]
struct FrenchElectionRow {
    #[serde(rename = "Tweet")]
    tweet: String,
    #[serde(rename = "Stance")]
    stance: String,
    #[serde(rename = "Set")]
    set: String,
}

/// 2017 French election and Italian referendum corpus.
///
/// Splits come from an in-file `Set` column that only distinguishes training
/// rows from everything else, so the non-training pool is halved once with a
/// fixed seed into disjoint val and test partitions.
pub struct FrenchElection;

impl DatasetSource for FrenchElection {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let dir = ctx.root.join("french-election");
        let mut rows = Vec::new();
        for (file, target) in TARGET_FILES {
            let path = dir.join(format!("{file}.csv"));
            let path = require_split_file(path, ctx.name, ctx.options.split)?;
            let raw = read_csv_rows::<FrenchElectionRow>(&path)?;
            let selected: Vec<FrenchElectionRow> = match ctx.options.split {
                Split::Train => raw
                    .into_iter()
                    .filter(|row| row.set == FRENCH_ELECTION_TRAIN_SET)
                    .collect(),
                Split::Val | Split::Test => {
                    let pool: Vec<FrenchElectionRow> = raw
                        .into_iter()
                        .filter(|row| row.set == FRENCH_ELECTION_TEST_SET)
                        .collect();
                    let (val, test) = seeded_halves(pool, POOL_HALVING_SEED);
                    if ctx.options.split == Split::Val { val } else { test }
                }
            };
            rows.extend(
                selected
                    .into_iter()
                    .map(|row| StanceRow::new(row.tweet, target, Some(row.stance))),
            );
        }
        Ok(rows)
    }

    fn label_mapping(
        &self,
        _ctx: &LoadContext<'_>,
        _rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        // The raw annotations mix casings and carry one misspelled value.
        Ok(LabelMapping::from_pairs([
            ("FAVOUR", "favor"),
            ("AGAINST", "against"),
            ("NONE", "neutral"),
            ("none", "neutral"),
            ("favor", "favor"),
            ("agains", "against"),
        ]))
    }
}
