//! Raw file readers shared by dataset sources.
//!
//! These sit below the per-source adaptation layer: they turn files into
//! typed rows or JSON values and know nothing about canonical columns.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::record::Field;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::DatasetError;

fn parse_error(path: &Path, reason: impl ToString) -> DatasetError {
    DatasetError::Parse {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Read a comma-delimited file with a header row into typed rows.
pub fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    read_delimited_rows(path, b',')
}

/// Read a delimited file with a header row into typed rows.
///
/// Numeric-looking id columns stay strings whenever the row type declares
/// them as such; no inference happens below the row level.
pub fn read_delimited_rows<T: DeserializeOwned>(
    path: &Path,
    delimiter: u8,
) -> Result<Vec<T>, DatasetError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(BufReader::new(file));
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result.map_err(|err| parse_error(path, err))?);
    }
    Ok(rows)
}

/// Read one JSON document as a single value.
pub fn read_json_value(path: &Path) -> Result<Value, DatasetError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| parse_error(path, err))
}

/// Read a JSON document holding an array of items, falling back to
/// line-delimited parsing when the document itself is malformed.
pub fn read_json_items(path: &Path) -> Result<Vec<Value>, DatasetError> {
    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Ok(vec![other]),
        Err(err) => {
            debug!(path = %path.display(), %err, "whole-document parse failed, retrying as line-delimited");
            parse_jsonl(path, &raw)
        }
    }
}

/// Read a line-delimited JSON file, skipping blank lines.
pub fn read_jsonl(path: &Path) -> Result<Vec<Value>, DatasetError> {
    let raw = std::fs::read_to_string(path)?;
    parse_jsonl(path, &raw)
}

fn parse_jsonl(path: &Path, raw: &str) -> Result<Vec<Value>, DatasetError> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).map_err(|err| parse_error(path, err)))
        .collect()
}

/// Deserialize JSON items into typed rows.
pub fn typed_items<T: DeserializeOwned>(
    path: &Path,
    items: Vec<Value>,
) -> Result<Vec<T>, DatasetError> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|err| parse_error(path, err)))
        .collect()
}

/// Read a columnar snapshot file into JSON-shaped rows.
///
/// Rows are materialized eagerly; snapshot sources are small enough that
/// row-group paging is not worth carrying here.
pub fn read_parquet_rows(path: &Path) -> Result<Vec<Map<String, Value>>, DatasetError> {
    let file = File::open(path)?;
    let reader = SerializedFileReader::new(file).map_err(|err| parse_error(path, err))?;
    let row_iter = reader
        .get_row_iter(None)
        .map_err(|err| parse_error(path, err))?;
    let mut rows = Vec::new();
    for row in row_iter {
        let row = row.map_err(|err| parse_error(path, err))?;
        let mut object = Map::new();
        for (name, field) in row.get_column_iter() {
            object.insert(name.clone(), field_to_json(field));
        }
        rows.push(object);
    }
    Ok(rows)
}

/// Convert one parquet field into a JSON value.
///
/// Covers the scalar and string-list shapes the snapshot sources use; other
/// nested shapes map to null.
fn field_to_json(field: &Field) -> Value {
    match field {
        Field::Null => Value::Null,
        Field::Bool(value) => Value::Bool(*value),
        Field::Byte(value) => Value::from(i64::from(*value)),
        Field::Short(value) => Value::from(i64::from(*value)),
        Field::Int(value) => Value::from(i64::from(*value)),
        Field::Long(value) => Value::from(*value),
        Field::UByte(value) => Value::from(u64::from(*value)),
        Field::UShort(value) => Value::from(u64::from(*value)),
        Field::UInt(value) => Value::from(u64::from(*value)),
        Field::ULong(value) => Value::from(*value),
        Field::Float(value) => serde_json::Number::from_f64(f64::from(*value))
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Field::Double(value) => serde_json::Number::from_f64(*value)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Field::Str(value) => Value::String(value.clone()),
        Field::ListInternal(list) => {
            Value::Array(list.elements().iter().map(field_to_json).collect())
        }
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct CsvRow {
        #[serde(rename = "Tweet")]
        tweet: String,
        #[serde(rename = "Stance")]
        stance: String,
    }

    #[test]
    fn csv_rows_deserialize_by_header_name() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("rows.csv");
        std::fs::write(&path, "Tweet,Stance\nhello,FAVOR\nworld,AGAINST\n").unwrap();

        let rows: Vec<CsvRow> = read_csv_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tweet, "hello");
        assert_eq!(rows[1].stance, "AGAINST");
    }

    #[test]
    fn tab_delimited_rows_use_the_given_delimiter() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("rows.tsv");
        std::fs::write(&path, "Tweet\tStance\nhola\tFAVOR\n").unwrap();

        let rows: Vec<CsvRow> = read_delimited_rows(&path, b'\t').unwrap();
        assert_eq!(rows[0].tweet, "hola");
    }

    #[test]
    fn json_items_fall_back_to_line_delimited_parsing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("items.json");
        // Two objects back to back are not a valid document, but are valid JSONL.
        std::fs::write(&path, "{\"id\": 1}\n{\"id\": 2}\n").unwrap();

        let items = read_json_items(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["id"], 2);
    }

    #[test]
    fn malformed_lines_fail_both_parsers() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{\"id\": 1}\nnot json at all\n").unwrap();

        let err = read_json_items(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn field_to_json_covers_scalars_and_string_lists() {
        assert_eq!(field_to_json(&Field::Str("x".into())), Value::String("x".into()));
        assert_eq!(field_to_json(&Field::Long(7)), Value::from(7i64));
        assert_eq!(field_to_json(&Field::Null), Value::Null);
        assert_eq!(field_to_json(&Field::Bool(true)), Value::Bool(true));
    }
}
