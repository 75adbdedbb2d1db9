use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::errors::DatasetError;
use crate::labels::LabelMapping;
use crate::read::{read_json_value, read_jsonl, typed_items};
use crate::record::StanceRow;
use crate::sources::{DatasetSource, LoadContext};
use crate::splits::{Split, SplitFractions, require_split_file, slice_split};

/// Matches the quoted input document inside an annotation-prompt transcript.
const INPUT_TEXT_PATTERN: &str = "Input text:\\s*\\n\"((?s:.+?))\"\\s*\\n\\n";
/// Matches each extracted claim in a transcript's assistant reply.
const CLAIM_PATTERN: &str = "\"text\":\\s*\"([^\"]+)\"";

fn compile(pattern: &str) -> Result<Regex, DatasetError> {
    Regex::new(pattern).map_err(|err| DatasetError::Parse {
        path: format!("<pattern {pattern}>"),
        reason: err.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    fn content_of(&self, path: &Path, role: &str) -> Result<&str, DatasetError> {
        self.messages
            .iter()
            .find(|message| message.role == role)
            .map(|message| message.content.as_str())
            .ok_or_else(|| DatasetError::Parse {
                path: path.display().to_string(),
                reason: format!("transcript has no '{role}' message"),
            })
    }
}

/// Claim-extraction transcripts: document/claim pairs with no stance labels.
///
/// Train has its own file; val and test are disjoint halves of the
/// validation file, split by cumulative fractions in file order.
pub struct RomainClaims;

impl DatasetSource for RomainClaims {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let dir = ctx.root.join("romain_claims");
        let file = match ctx.options.split {
            Split::Train => "train.jsonl",
            Split::Val | Split::Test => "valid.jsonl",
        };
        let path = require_split_file(dir.join(file), ctx.name, ctx.options.split)?;
        let transcripts: Vec<Transcript> = typed_items(&path, read_jsonl(&path)?)?;
        let transcripts = match ctx.options.split {
            Split::Train => transcripts,
            split => {
                let halves = SplitFractions {
                    train: 0.0,
                    val: 0.5,
                };
                slice_split(transcripts, halves, split)
            }
        };

        let input_text = compile(INPUT_TEXT_PATTERN)?;
        let claim = compile(CLAIM_PATTERN)?;
        let mut rows = Vec::new();
        for transcript in &transcripts {
            let prompt = transcript.content_of(&path, "user")?;
            let reply = transcript.content_of(&path, "assistant")?;
            let text = input_text
                .captures(prompt)
                .and_then(|captures| captures.get(1))
                .map(|capture| capture.as_str())
                .ok_or_else(|| DatasetError::Parse {
                    path: path.display().to_string(),
                    reason: "prompt carries no quoted input text".to_string(),
                })?;
            for captures in claim.captures_iter(reply) {
                if let Some(target) = captures.get(1) {
                    rows.push(StanceRow::new(text, target.as_str(), None));
                }
            }
        }
        Ok(rows)
    }

    fn label_mapping(
        &self,
        _ctx: &LoadContext<'_>,
        _rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        Ok(LabelMapping::empty())
    }
}

#[derive(Debug, Deserialize)]
struct TiktokItem {
    input_text: String,
    #[serde(default)]
    claims: Option<Vec<Option<String>>>,
}

/// Validated TikTok claim extractions keyed by video id in one JSON object.
///
/// Entries load in key order, slice 80/10/10, then explode one row per
/// extracted claim; unreviewed or empty claims are skipped.
pub struct RomainTiktokClaims;

impl DatasetSource for RomainTiktokClaims {
    fn read_split(&self, ctx: &LoadContext<'_>) -> Result<Vec<StanceRow>, DatasetError> {
        let path = require_split_file(
            ctx.root
                .join("romain_tiktok_claims")
                .join("1-claim-extractions-validated.json"),
            ctx.name,
            ctx.options.split,
        )?;
        let document = read_json_value(&path)?;
        let serde_json::Value::Object(entries) = document else {
            return Err(DatasetError::Parse {
                path: path.display().to_string(),
                reason: "expected a top-level object keyed by video id".to_string(),
            });
        };
        // Map iteration is sorted by key, so the slice below is deterministic.
        let items: Vec<TiktokItem> = typed_items(&path, entries.into_iter().map(|(_, value)| value).collect())?;
        let items = slice_split(items, SplitFractions::EIGHTY_TEN_TEN, ctx.options.split);

        let mut rows = Vec::new();
        for item in items {
            let Some(claims) = item.claims else {
                continue;
            };
            for claim in claims.into_iter().flatten() {
                if claim.is_empty() {
                    continue;
                }
                rows.push(StanceRow::new(item.input_text.clone(), claim, None));
            }
        }
        Ok(rows)
    }

    fn label_mapping(
        &self,
        _ctx: &LoadContext<'_>,
        _rows: &[StanceRow],
    ) -> Result<LabelMapping, DatasetError> {
        Ok(LabelMapping::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_text_pattern_captures_multiline_documents() {
        let pattern = compile(INPUT_TEXT_PATTERN).unwrap();
        let prompt = "Extract claims.\n\nInput text:\n\"first line\nsecond line\"\n\nRespond as JSON.";
        let captures = pattern.captures(prompt).unwrap();
        assert_eq!(&captures[1], "first line\nsecond line");
    }

    #[test]
    fn claim_pattern_captures_every_extracted_claim() {
        let pattern = compile(CLAIM_PATTERN).unwrap();
        let reply = "[{\"text\": \"claim one\"}, {\"text\": \"claim two\"}]";
        let claims: Vec<&str> = pattern
            .captures_iter(reply)
            .filter_map(|captures| captures.get(1).map(|capture| capture.as_str()))
            .collect();
        assert_eq!(claims, vec!["claim one", "claim two"]);
    }
}
