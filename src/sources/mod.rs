//! Per-dataset source bundles and the name-resolution registry.
//!
//! Each corpus family implements [`DatasetSource`]: raw reading, split
//! selection, and column adaptation bundled behind a uniform interface,
//! plus the strict label mapping declared for its vocabulary. Names resolve
//! through a registry lookup, so adding a corpus is additive.

use std::path::Path;

use crate::config::LoadOptions;
use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::record::StanceRow;

mod catalonia;
mod ctsdt;
mod ezstance;
mod french_election;
mod mtcsd;
mod pstance;
mod romain;
mod semeval;
mod snapshots;
mod stanceosaurus;
mod vast;

pub use catalonia::Catalonia;
pub use ctsdt::Ctsdt;
pub use ezstance::EzStance;
pub use french_election::FrenchElection;
pub use mtcsd::Mtcsd;
pub use pstance::PStance;
pub use romain::{RomainClaims, RomainTiktokClaims};
pub use semeval::Semeval;
pub use snapshots::{Conspiracies, Kirk};
pub use stanceosaurus::Stanceosaurus;
pub use vast::Vast;

/// Shared inputs threaded into every source call.
pub struct LoadContext<'a> {
    /// Literal requested dataset name; family sources match several.
    pub name: &'a str,
    /// Root directory holding all raw dataset files.
    pub root: &'a Path,
    /// Caller options for this load.
    pub options: &'a LoadOptions,
}

/// One corpus family behind the registry.
///
/// `read_split` covers raw reading, split selection, thread reconstruction,
/// and column adaptation; `label_mapping` declares the strict mapping for
/// the rows just produced (some vocabularies are built from observed values,
/// so the rows are an input).
pub trait DatasetSource: Send + Sync {
    /// Load and adapt the requested split into pre-grouping rows.
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError>;

    /// Declare the strict label mapping for the rows just produced.
    fn label_mapping(
        &self,
        ctx: &LoadContext<'_>,
        rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError>;
}

struct RegistryEntry {
    matches: fn(&str) -> bool,
    build: fn() -> Box<dyn DatasetSource>,
}

static REGISTRY: &[RegistryEntry] = &[
    RegistryEntry {
        matches: |name| name == "semeval",
        build: || Box::new(Semeval),
    },
    RegistryEntry {
        matches: |name| name.contains("vast"),
        build: || Box::new(Vast),
    },
    RegistryEntry {
        matches: |name| name == "ezstance",
        build: || Box::new(EzStance::noun_phrase()),
    },
    RegistryEntry {
        matches: |name| name == "ezstance_claim",
        build: || Box::new(EzStance::claim()),
    },
    RegistryEntry {
        matches: |name| name == "pstance",
        build: || Box::new(PStance),
    },
    RegistryEntry {
        matches: |name| name == "mtcsd",
        build: || Box::new(Mtcsd),
    },
    RegistryEntry {
        matches: |name| name == "romain_claims",
        build: || Box::new(RomainClaims),
    },
    RegistryEntry {
        matches: |name| name == "romain_tiktok_claims",
        build: || Box::new(RomainTiktokClaims),
    },
    RegistryEntry {
        matches: |name| name == "ctsdt",
        build: || Box::new(Ctsdt),
    },
    RegistryEntry {
        matches: |name| name == "catalonia",
        build: || Box::new(Catalonia),
    },
    RegistryEntry {
        matches: |name| name == "french-election",
        build: || Box::new(FrenchElection),
    },
    RegistryEntry {
        matches: |name| name == "stanceosaurus",
        build: || Box::new(Stanceosaurus),
    },
    RegistryEntry {
        matches: |name| name == "conspiracies",
        build: || Box::new(Conspiracies),
    },
    RegistryEntry {
        matches: |name| name == "kirk",
        build: || Box::new(Kirk),
    },
];

/// Resolve a dataset name to its registered source.
pub fn resolve(name: &str) -> Result<Box<dyn DatasetSource>, DatasetError> {
    REGISTRY
        .iter()
        .find(|entry| (entry.matches)(name))
        .map(|entry| (entry.build)())
        .ok_or_else(|| DatasetError::UnknownDataset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rejects_unregistered_names() {
        match resolve("not_a_dataset") {
            Err(DatasetError::UnknownDataset(name)) => assert_eq!(name, "not_a_dataset"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("unregistered name must not resolve"),
        }
    }

    #[test]
    fn vast_entry_matches_the_whole_family() {
        assert!(resolve("vast").is_ok());
        assert!(resolve("vast_extended").is_ok());
    }
}
