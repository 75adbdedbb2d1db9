/// Constants used by split selection strategies.
pub mod splits {
    /// Seed for the whole-table shuffle applied to shuffle-then-slice sources.
    pub const SHUFFLE_SEED: u64 = 42;
    /// Seed for halving a shared labeled pool into disjoint val/test partitions.
    pub const POOL_HALVING_SEED: u64 = 42;
    /// Default cumulative fractions for sources partitioned 80/10/10.
    pub const TRAIN_FRACTION: f64 = 0.8;
    /// Validation fraction paired with [`TRAIN_FRACTION`].
    pub const VAL_FRACTION: f64 = 0.1;
    /// Validation fraction for sources that carve val out of the train file.
    pub const TRAIN_FILE_VAL_FRACTION: f64 = 0.2;
}

/// Constants used by conversational-thread reconstruction.
pub mod thread {
    /// Most negative ancestor offset accepted before the whole thread is dropped as too deep.
    pub const MAX_ANCESTOR_OFFSET: i64 = -5;
    /// Prefix for pivot column names derived from ancestor offsets.
    pub const TEXT_COLUMN_PREFIX: &str = "text_";
    /// Pivot column holding the leaf document itself.
    pub const LEAF_TEXT_COLUMN: &str = "text_0";
}

/// Constants owned by individual dataset sources.
pub mod sources {
    /// `type_idx` sentinel marking synthetic-neutral rows in the VAST family.
    pub const VAST_SYNTHETIC_NEUTRAL_TYPE_IDX: i64 = 4;
    /// Split-column value selecting training rows in the French election corpus.
    pub const FRENCH_ELECTION_TRAIN_SET: &str = "Training";
    /// Split-column value selecting the shared val/test pool in the French election corpus.
    pub const FRENCH_ELECTION_TEST_SET: &str = "Test";
    /// Stanceosaurus annotation export that must be skipped during directory walks.
    pub const STANCEOSAURUS_MASKED_FILENAME: &str = "masked.json";
    /// Language whose files are already partitioned into split directories.
    pub const STANCEOSAURUS_PRESPLIT_LANGUAGE: &str = "english";
    /// Fixed target attached to every CTSDT record.
    pub const CTSDT_TARGET: &str = "COVID-19 vaccination";
    /// Fixed target attached to every Catalonia record.
    pub const CATALONIA_TARGET: &str = "Catalonia independence";
    /// Event summary attached as `Context` to every record of the kirk snapshot.
    pub const KIRK_CONTEXT: &str = "On September 10, 2025, Charlie Kirk, an American right-wing political activist, was assassinated while addressing an audience at Utah Valley University for a Turning Point USA speaking event. Kirk was fatally shot in the neck by a shooter on a building roof. The suspected shooter, Tyler Robinson, was identified 2 days later. Video footage spread rapidly on social media. Kirk's memorial was held at State Farm Stadium on September 21.";
}
