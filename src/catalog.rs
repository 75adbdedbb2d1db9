//! The catalog: name-keyed loading of normalized stance datasets.

use std::path::PathBuf;

use tracing::debug;

use crate::config::LoadOptions;
use crate::errors::DatasetError;
use crate::group::{collapse, singletons};
use crate::record::{CanonicalRecord, DatasetTable};
use crate::sources::{self, LoadContext};

/// Name-keyed access to every registered corpus under one raw-data root.
///
/// Loading resolves the name, reads and adapts the requested split, applies
/// the source's strict label mapping, optionally collapses repeated
/// judgements, and stamps every record with the requested name.
#[derive(Clone, Debug)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    /// Build a catalog over the directory holding all raw dataset files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this catalog reads raw files from.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Load one dataset's requested split as a canonical table.
    pub fn load(&self, name: &str, options: &LoadOptions) -> Result<DatasetTable, DatasetError> {
        let source = sources::resolve(name)?;
        let ctx = LoadContext {
            name,
            root: &self.root,
            options,
        };
        let mut rows = source.read_split(&ctx)?;
        let mapping = source.label_mapping(&ctx, &rows)?;
        mapping.apply(name, &mut rows)?;

        let groups = if options.group {
            collapse(rows)
        } else {
            singletons(rows)
        };
        let records = groups
            .into_iter()
            .map(|group| CanonicalRecord {
                text: group.text,
                targets: group.targets,
                stances: group.stances,
                dataset: name.to_string(),
                parent_texts: group.parent_texts,
                context: group.context,
            })
            .collect();
        let table = DatasetTable::from_records(records);
        debug!(
            dataset = name,
            split = %options.split,
            records = table.len(),
            "loaded dataset"
        );
        Ok(table)
    }

    /// Load several datasets and concatenate them with union-of-columns
    /// semantics; records from sources lacking an optional column read as
    /// null in that column.
    pub fn load_many<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
        options: &LoadOptions,
    ) -> Result<DatasetTable, DatasetError> {
        let mut tables = Vec::new();
        for name in names {
            tables.push(self.load(name, options)?);
        }
        Ok(DatasetTable::concat(tables))
    }
}
