//! Heading-delimited section scanning.
//!
//! Both scans share the same destructive loop: detach the first remaining
//! heading at the chosen level, record its trimmed text as the key, then
//! detach and capture the first list that follows it. Because consumed
//! nodes vanish from subsequent scans, "the first remaining heading" is
//! always the right one and no list can be claimed twice.

use scraper::Html;
use ego_tree::NodeId;
use tracing::{debug, trace};

use rubrix_shared::{CONTENTS_HEADING, Result};

use crate::dom;
use crate::entry;
use crate::lists;

// ---------------------------------------------------------------------------
// Heading level
// ---------------------------------------------------------------------------

/// Heading level that delimits body sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `<h2>` — the normal section level.
    H2,
    /// `<h3>` — used when the document splits sections into sub-lists.
    H3,
}

impl HeadingLevel {
    /// The HTML tag name for this level.
    pub fn tag(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

// ---------------------------------------------------------------------------
// Section map
// ---------------------------------------------------------------------------

/// Ordered key/value pairs with last-write-wins on duplicate keys.
///
/// A duplicate section name silently replaces the earlier capture while
/// keeping its original position — the behavior the flat mapping view of
/// the output format implies.
#[derive(Debug)]
pub struct SectionMap<V> {
    pairs: Vec<(String, V)>,
}

impl<V> Default for SectionMap<V> {
    fn default() -> Self {
        Self { pairs: Vec::new() }
    }
}

impl<V> SectionMap<V> {
    /// Insert a key, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: String, value: V) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, V)> {
        self.pairs.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Body scan
// ---------------------------------------------------------------------------

/// Scan the whole document for sections at `level`.
///
/// Each iteration detaches the first remaining heading, records its trimmed
/// text, and captures (detaches) the first list that follows anywhere in
/// the remaining document. A heading with no following list is legitimate
/// and recorded as `None`. The scan ends when no heading at `level` is
/// left.
pub fn scan_sections(doc: &mut Html, level: HeadingLevel) -> SectionMap<Option<NodeId>> {
    let root = dom::root(doc);
    let mut sections = SectionMap::default();

    loop {
        let Some(heading) = dom::find_element(doc, root, level.tag()) else {
            break;
        };
        let key = dom::visible_text(doc, heading).trim().to_string();
        dom::detach(doc, heading);

        let list = lists::find_list(doc, root);
        trace!(%key, captured = list.is_some(), "section scanned");
        sections.insert(key, list);
    }

    debug!(
        level = level.tag(),
        sections = sections.len(),
        "body scan complete"
    );
    sections
}

// ---------------------------------------------------------------------------
// Contents scan
// ---------------------------------------------------------------------------

/// Extract the Contents mapping: ordered section name → raw anchor markup.
///
/// Finds the first level-2 heading whose text is exactly `Contents`,
/// detaches it, captures the list that follows, and runs each top-level
/// item through entry extraction to recover its name and anchor markup.
/// Other level-2 headings are left untouched for the body scan.
///
/// A document without a Contents heading yields an empty map — and thus an
/// empty index — rather than an error.
pub fn extract_contents(doc: &mut Html, spacing: u32) -> Result<SectionMap<String>> {
    let root = dom::root(doc);
    let mut contents = SectionMap::default();

    let Some(heading) = dom::find_element_with_text(doc, root, "h2", CONTENTS_HEADING) else {
        debug!("no Contents heading, yielding empty index");
        return Ok(contents);
    };
    dom::detach(doc, heading);

    if let Some(list) = lists::find_list(doc, root) {
        for item in lists::fold_items(doc, list, false) {
            let seed = entry::extract_entry(doc, &item, 0, spacing)?;
            contents.insert(seed.name, seed.html);
        }
    }

    debug!(entries = contents.len(), "Contents extracted");
    Ok(contents)
}
