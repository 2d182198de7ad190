//! Version accessor for the JSON package manifest.
//!
//! The manifest is round-tripped through `serde_json` with key order and
//! number text preserved, and written back with two-space indentation plus a
//! trailing newline, the layout npm itself produces.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ReleaseError, Result};

fn parse_document(text: &str) -> Result<Value> {
    // Malformed JSON is reported like an unreadable file.
    serde_json::from_str(text).map_err(|e| ReleaseError::Io(io::Error::from(e)))
}

/// Extracts the `version` string from manifest text.
pub fn version_from_json(text: &str) -> Result<String> {
    let document = parse_document(text)?;
    match document.get("version") {
        Some(Value::String(version)) => Ok(version.clone()),
        Some(other) => Err(ReleaseError::parse(format!(
            "Manifest field 'version' is not a string: {}",
            other
        ))),
        None => Err(ReleaseError::parse("Manifest has no 'version' field")),
    }
}

/// Returns manifest text with `version` set to `new_version`.
pub fn set_version_in_json(text: &str, new_version: &str) -> Result<String> {
    let mut document = parse_document(text)?;
    let Some(object) = document.as_object_mut() else {
        return Err(ReleaseError::parse("Manifest root is not a JSON object"));
    };
    match object.get("version") {
        Some(Value::String(_)) => {}
        Some(other) => {
            return Err(ReleaseError::parse(format!(
                "Manifest field 'version' is not a string: {}",
                other
            )))
        }
        None => return Err(ReleaseError::parse("Manifest has no 'version' field")),
    }
    object.insert("version".to_string(), Value::String(new_version.to_string()));

    let mut rendered = serde_json::to_string_pretty(&document)
        .map_err(|e| ReleaseError::Io(io::Error::from(e)))?;
    rendered.push('\n');
    Ok(rendered)
}

/// Reads the `version` field of the manifest at `path`.
pub fn read_version(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    version_from_json(&text)
}

/// Rewrites the `version` field of the manifest at `path`.
pub fn write_version(path: &Path, new_version: &str) -> Result<()> {
    let text = fs::read_to_string(path)?;
    let updated = set_version_in_json(&text, new_version)?;
    fs::write(path, updated)?;
    Ok(())
}
