//! Core domain types for extracted awesome-list indexes.

use serde::{Deserialize, Serialize};

/// Heading text that introduces the table of contents of an awesome list.
pub const CONTENTS_HEADING: &str = "Contents";

/// Default indentation step applied per nesting level.
pub const DEFAULT_SUB_LIST_SPACING: u32 = 2;

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One extracted list item: a named link plus its trailing text and any
/// nested child entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Trimmed visible text of the item's anchor.
    pub name: String,
    /// The anchor's link target, trimmed.
    pub url: String,
    /// Trimmed visible text remaining in the item once the anchor is
    /// consumed (typically the description after the link).
    pub text: String,
    /// Raw serialized markup of the consumed anchor, kept for lossless
    /// dumps and debugging.
    pub html: String,
    /// Indentation depth: nesting level × spacing step. Zero at top level,
    /// strictly greater for children.
    pub depth: u32,
    /// Nested child entries, in document order. Empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entry>,
}

impl Entry {
    /// Total number of entries in this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Entry::subtree_len).sum::<usize>()
    }
}

// ---------------------------------------------------------------------------
// Rubric
// ---------------------------------------------------------------------------

/// One top-level named section of the extracted index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    /// Section name, taken from the Contents list item that advertised it.
    pub key: String,
    /// Top-level entries; sub-entries live under their parent entry.
    pub entries: Vec<Entry>,
}

// ---------------------------------------------------------------------------
// AwesomeList
// ---------------------------------------------------------------------------

/// The whole document's extraction result. Rubric order follows the
/// Contents list, not the order sections appear in the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwesomeList {
    /// Extracted rubrics, in Contents order.
    pub rubrics: Vec<Rubric>,
}

impl AwesomeList {
    /// Look up a rubric by its key.
    pub fn rubric(&self, key: &str) -> Option<&Rubric> {
        self.rubrics.iter().find(|r| r.key == key)
    }

    /// Total number of entries across all rubrics, nested included.
    pub fn entry_count(&self) -> usize {
        self.rubrics
            .iter()
            .flat_map(|r| r.entries.iter())
            .map(Entry::subtree_len)
            .sum()
    }
}
