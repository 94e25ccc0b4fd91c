//! Core extraction passes for awesome-list indexes.
//!
//! The rendered document is consumed destructively: headings and captured
//! lists are detached from the DOM as each pass claims them, so every scan
//! simply looks for "the first remaining" node of interest without tracking
//! visited positions, and no list can be captured under two headings.
//!
//! Passes, leaves first:
//! - [`dom`] — thin primitives over the mutable DOM tree
//! - [`lists`] — nested-list discovery and folding into (item, children) pairs
//! - [`entry`] — single-entry name/url/text/markup extraction
//! - [`sections`] — heading-delimited section scanning, Contents included
//! - [`builder`] — the one-shot pipeline tying the passes together

pub mod builder;
pub mod dom;
pub mod entry;
pub mod lists;
pub mod sections;

pub use builder::{extract, extract_from_document};
