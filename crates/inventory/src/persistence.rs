//! JSON file persistence for the stock mapping.
//!
//! The document is a flat object `{ "<item>": <quantity>, ... }` with no
//! version field. Key order in the file follows the store's insertion order.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use stockroom_core::{ItemName, Quantity, StockError, StockResult};

/// Default data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Why a load did not replace the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The file does not exist (benign).
    NotFound,
    /// The file could not be read or is not valid JSON.
    Malformed(String),
    /// Valid JSON, but not an object of item name to non-negative integer.
    InvalidFormat(String),
}

/// Result of [`crate::InventoryStore::load_from`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { items: usize },
    NotFound,
    Malformed(String),
    InvalidFormat(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

impl From<LoadFailure> for LoadOutcome {
    fn from(failure: LoadFailure) -> Self {
        match failure {
            LoadFailure::NotFound => LoadOutcome::NotFound,
            LoadFailure::Malformed(reason) => LoadOutcome::Malformed(reason),
            LoadFailure::InvalidFormat(reason) => LoadOutcome::InvalidFormat(reason),
        }
    }
}

/// Read and decode a stock document.
pub fn read_stock(path: &Path) -> Result<Vec<(ItemName, Quantity)>, LoadFailure> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(LoadFailure::NotFound),
        Err(err) => {
            return Err(LoadFailure::Malformed(format!(
                "failed to read {}: {err}",
                path.display()
            )));
        }
    };

    let doc: JsonValue =
        serde_json::from_str(&raw).map_err(|e| LoadFailure::Malformed(e.to_string()))?;

    let map = match doc {
        JsonValue::Object(map) => map,
        other => {
            return Err(LoadFailure::InvalidFormat(format!(
                "expected a JSON object at top level, found {}",
                json_kind(&other)
            )));
        }
    };

    map.into_iter()
        .map(|(key, value)| -> Result<(ItemName, Quantity), LoadFailure> {
            let quantity = value.as_u64().ok_or_else(|| {
                LoadFailure::InvalidFormat(format!(
                    "quantity for '{key}' is not a non-negative integer: {value}"
                ))
            })?;
            let name = ItemName::parse(key).map_err(|e| LoadFailure::InvalidFormat(e.to_string()))?;
            Ok((name, quantity))
        })
        .collect()
}

/// Encode and write a stock document, replacing any existing file.
pub fn write_stock<'a>(
    path: &Path,
    entries: impl IntoIterator<Item = (&'a ItemName, Quantity)>,
) -> StockResult<()> {
    let map: Map<String, JsonValue> = entries
        .into_iter()
        .map(|(name, quantity)| (name.as_str().to_string(), JsonValue::from(quantity)))
        .collect();

    let mut body = serde_json::to_string_pretty(&JsonValue::Object(map))
        .map_err(|e| StockError::persistence(format!("failed to encode stock: {e}")))?;
    body.push('\n');

    std::fs::write(path, body)
        .map_err(|e| StockError::persistence(format!("failed to write {}: {e}", path.display())))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_stock(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err, LoadFailure::NotFound);
    }

    #[test]
    fn broken_json_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "{\"apple\": ");
        match read_stock(&path).unwrap_err() {
            LoadFailure::Malformed(_) => {}
            other => panic!("Expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn array_document_is_invalid_format() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "[1, 2, 3]");
        match read_stock(&path).unwrap_err() {
            LoadFailure::InvalidFormat(reason) => assert!(reason.contains("an array")),
            other => panic!("Expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn negative_or_fractional_values_are_invalid_format() {
        let dir = TempDir::new().unwrap();
        for body in [r#"{"apple": -1}"#, r#"{"apple": 1.5}"#, r#"{"apple": "ten"}"#] {
            let path = write(&dir, body);
            match read_stock(&path).unwrap_err() {
                LoadFailure::InvalidFormat(_) => {}
                other => panic!("Expected InvalidFormat for {body}, got {other:?}"),
            }
        }
    }

    #[test]
    fn blank_key_is_invalid_format() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"{"  ": 4}"#);
        assert!(matches!(read_stock(&path), Err(LoadFailure::InvalidFormat(_))));
    }

    #[test]
    fn file_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"{"zucchini": 1, "apple": 2, "mango": 3}"#);
        let names: Vec<String> = read_stock(&path)
            .unwrap()
            .into_iter()
            .map(|(name, _)| name.into_inner())
            .collect();
        assert_eq!(names, vec!["zucchini", "apple", "mango"]);
    }

    #[test]
    fn written_document_is_pretty_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let apple = ItemName::parse("apple").unwrap();
        write_stock(&path, [(&apple, 7)]).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert_eq!(body, "{\n  \"apple\": 7\n}\n");
    }

    #[test]
    fn write_into_missing_directory_is_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no").join("such").join("dir.json");
        let err = write_stock(&path, std::iter::empty()).unwrap_err();
        assert!(matches!(err, StockError::Persistence(_)));
    }
}
