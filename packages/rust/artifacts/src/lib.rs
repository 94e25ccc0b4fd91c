//! Output artifacts for extracted awesome lists.
//!
//! Two serializations of an [`AwesomeList`]:
//! - a human-readable indented listing, one line per entry
//! - a lossless JSON export keyed by rubric, mirroring every entry field
//!
//! The JSON export round-trips through [`parse_export`]: rubric order,
//! entry order, and the raw anchor markup all survive.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use rubrix_shared::{AwesomeList, Entry, Result, Rubric, RubrixError};

// ---------------------------------------------------------------------------
// Human-readable listing
// ---------------------------------------------------------------------------

/// Render the indented text listing.
///
/// Per rubric: the key on its own line, then one line per entry,
/// depth-first: `<depth spaces> - <name> <text> [<url>]`.
pub fn render_listing(list: &AwesomeList) -> String {
    let mut out = String::new();
    for rubric in &list.rubrics {
        out.push_str(&rubric.key);
        out.push('\n');
        for entry in &rubric.entries {
            push_entry_lines(&mut out, entry);
        }
    }
    out
}

fn push_entry_lines(out: &mut String, entry: &Entry) {
    for _ in 0..entry.depth {
        out.push(' ');
    }
    out.push_str(&format!(
        " - {} {} [{}]\n",
        entry.name, entry.text, entry.url
    ));
    for child in &entry.children {
        push_entry_lines(out, child);
    }
}

// ---------------------------------------------------------------------------
// JSON export
// ---------------------------------------------------------------------------

/// Build the JSON export value: an object keyed by rubric key, in rubric
/// order, whose values are ordered arrays of entry records.
pub fn to_json_value(list: &AwesomeList) -> Result<Value> {
    let mut map = Map::new();
    for rubric in &list.rubrics {
        let entries = rubric
            .entries
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| RubrixError::Export(e.to_string()))?;
        map.insert(rubric.key.clone(), Value::Array(entries));
    }
    Ok(Value::Object(map))
}

/// Parse a JSON export back into an [`AwesomeList`]. Inverse of
/// [`to_json_value`]; rubric order follows the object's key order.
pub fn parse_export(json: &str) -> Result<AwesomeList> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| RubrixError::Export(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(RubrixError::Export(
            "export root must be a JSON object keyed by rubric".into(),
        ));
    };

    let mut rubrics = Vec::with_capacity(map.len());
    for (key, entries) in map {
        let entries: Vec<Entry> = serde_json::from_value(entries)
            .map_err(|e| RubrixError::Export(format!("rubric {key:?}: {e}")))?;
        rubrics.push(Rubric { key, entries });
    }
    Ok(AwesomeList { rubrics })
}

// ---------------------------------------------------------------------------
// File output
// ---------------------------------------------------------------------------

/// Write the text listing artifact.
pub fn write_listing(list: &AwesomeList, path: &Path) -> Result<()> {
    std::fs::write(path, render_listing(list)).map_err(|e| RubrixError::io(path, e))?;
    debug!(?path, "listing artifact written");
    Ok(())
}

/// Write the JSON export artifact, pretty-printed.
pub fn write_json(list: &AwesomeList, path: &Path) -> Result<()> {
    let value = to_json_value(list)?;
    let json = serde_json::to_string_pretty(&value)
        .map_err(|e| RubrixError::Export(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| RubrixError::io(path, e))?;
    debug!(?path, "json artifact written");
    Ok(())
}
