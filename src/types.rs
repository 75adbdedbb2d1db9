/// Identifier for a registered corpus, also stamped into the `Dataset` column.
/// Examples: `semeval`, `ezstance_claim`, `french-election`
pub type DatasetName = String;
/// Document text whose stance is being judged.
/// Example: `We should all be vaccinated before winter.`
pub type DocumentText = String;
/// Target noun phrase or claim a stance is expressed toward.
/// Examples: `Climate Change is a Real Concern`, `COVID-19 vaccination`
pub type TargetPhrase = String;
/// Stance value as it appears in a raw file, before strict mapping.
/// Examples: `FAVOR`, `AGAINST`, `0`, `Dicussing`
pub type RawLabel = String;
/// Stance value after strict mapping into a task's canonical vocabulary.
/// Examples: `favor`, `neutral`, `leaning supporting`
pub type CanonicalLabel = String;
/// Identifier of one post inside a conversational thread.
/// Example: `173`
pub type PostId = i64;
/// Pivot column name derived from an ancestor offset.
/// Examples: `text_0`, `text_-3`
pub type ColumnName = String;
