//! Top-level extraction pipeline.
//!
//! One-shot progression over a rendered document: detect sub-list mode on
//! the pristine tree, extract the Contents mapping, scan the body sections,
//! then pair Contents keys against body captures to build the final rubric
//! tree in Contents order.

use scraper::Html;
use tracing::{debug, info, instrument};

use rubrix_shared::{AwesomeList, ExtractConfig, Result, Rubric};

use crate::dom;
use crate::entry;
use crate::lists;
use crate::sections::{self, HeadingLevel};

/// Extract the full rubric tree from markdown source text.
#[instrument(skip(source), fields(source_len = source.len()))]
pub fn extract(source: &str, config: &ExtractConfig) -> Result<AwesomeList> {
    let doc = rubrix_markdown::render(source);
    extract_from_document(doc, config)
}

/// Run the extraction passes over an already-rendered document.
///
/// The document is consumed: headings and captured lists are detached as
/// each pass claims them, so the same document cannot be extracted twice.
pub fn extract_from_document(mut doc: Html, config: &ExtractConfig) -> Result<AwesomeList> {
    let spacing = config.sub_list_spacing;
    let root = dom::root(&doc);

    // Sub-list mode must be decided on the pristine tree; the destructive
    // passes below remove the headings it keys on.
    let sub_list_mode = dom::find_element(&doc, root, "h3").is_some();

    let contents = sections::extract_contents(&mut doc, spacing)?;

    let body_level = if sub_list_mode {
        HeadingLevel::H3
    } else {
        HeadingLevel::H2
    };
    let body = sections::scan_sections(&mut doc, body_level);

    let mut rubrics = Vec::new();
    for (key, _anchor_html) in contents.iter() {
        // A section advertised in Contents but absent (or empty) in the
        // body is dropped, not an error.
        let Some(Some(list)) = body.get(key).map(|captured| *captured) else {
            debug!(%key, "no body section for Contents key, dropping");
            continue;
        };

        let items = lists::fold_items(&mut doc, list, false);
        if items.is_empty() {
            debug!(%key, "body section has an empty list, dropping");
            continue;
        }

        let mut entries = Vec::with_capacity(items.len());
        for item in &items {
            entries.push(entry::extract_entry(&mut doc, item, 0, spacing)?);
        }

        rubrics.push(Rubric {
            key: key.clone(),
            entries,
        });
    }

    let list = AwesomeList { rubrics };
    info!(
        rubrics = list.rubrics.len(),
        entries = list.entry_count(),
        sub_list_mode,
        "awesome list extracted"
    );
    Ok(list)
}
