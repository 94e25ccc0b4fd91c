//! Single-entry extraction.

use scraper::Html;
use tracing::trace;

use rubrix_shared::{Entry, Result, RubrixError};

use crate::dom;
use crate::lists::FoldedItem;

/// Extract one [`Entry`] from a folded list item.
///
/// The item's first `a[href]` descendant is detached and consumed: `name`
/// and `html` come from the anchor, `url` from its trimmed `href`, while
/// `text` is the visible text left in the item afterwards. Children are
/// extracted one spacing step deeper, in order.
///
/// An item without a link anchor is a data defect in the source document
/// and fails with [`RubrixError::MalformedEntry`], aborting the run.
pub fn extract_entry(
    doc: &mut Html,
    item: &FoldedItem,
    depth: u32,
    spacing: u32,
) -> Result<Entry> {
    let anchor = dom::find_anchor(doc, item.node).ok_or_else(|| {
        RubrixError::malformed_entry(dom::visible_text(doc, item.node).trim())
    })?;
    dom::detach(doc, anchor);

    let html = dom::outer_html(doc, anchor);
    let url = dom::attr(doc, anchor, "href")
        .unwrap_or_default()
        .trim()
        .to_string();
    let name = dom::visible_text(doc, anchor).trim().to_string();
    let text = dom::visible_text(doc, item.node).trim().to_string();

    let mut children = Vec::with_capacity(item.children.len());
    for child in &item.children {
        children.push(extract_entry(doc, child, depth + spacing, spacing)?);
    }

    trace!(%name, depth, child_count = children.len(), "entry extracted");

    Ok(Entry {
        name,
        url,
        text,
        html,
        depth,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lists;

    fn first_item(md: &str) -> (Html, Vec<FoldedItem>) {
        let mut doc = rubrix_markdown::render(md);
        let root = dom::root(&doc);
        let list = lists::find_list(&mut doc, root).expect("list");
        let items = lists::fold_items(&mut doc, list, false);
        (doc, items)
    }

    #[test]
    fn extracts_name_url_text_and_markup() {
        let (mut doc, items) = first_item("- [Tool](https://tool.example.com) - does things.\n");
        let entry = extract_entry(&mut doc, &items[0], 0, 2).expect("entry");

        assert_eq!(entry.name, "Tool");
        assert_eq!(entry.url, "https://tool.example.com");
        assert_eq!(entry.text, "- does things.");
        assert_eq!(entry.html, "<a href=\"https://tool.example.com\">Tool</a>");
        assert_eq!(entry.depth, 0);
        assert!(entry.children.is_empty());
    }

    #[test]
    fn text_excludes_consumed_anchor() {
        let (mut doc, items) = first_item("- [Name](#n) trailing description\n");
        let entry = extract_entry(&mut doc, &items[0], 0, 2).expect("entry");
        assert!(!entry.text.contains("Name"));
        assert_eq!(entry.text, "trailing description");
    }

    #[test]
    fn children_extracted_one_spacing_step_deeper() {
        let md = "- [P](#p) parent\n  - [C](#c) child\n    - [G](#g) grandchild\n";
        let (mut doc, items) = first_item(md);
        let entry = extract_entry(&mut doc, &items[0], 0, 2).expect("entry");

        assert_eq!(entry.depth, 0);
        assert_eq!(entry.children.len(), 1);
        assert_eq!(entry.children[0].depth, 2);
        assert_eq!(entry.children[0].children[0].depth, 4);
    }

    #[test]
    fn custom_spacing_changes_depth_step() {
        let (mut doc, items) = first_item("- [P](#p)\n  - [C](#c)\n");
        let entry = extract_entry(&mut doc, &items[0], 0, 4).expect("entry");
        assert_eq!(entry.children[0].depth, 4);
    }

    #[test]
    fn item_without_link_is_malformed() {
        let (mut doc, items) = first_item("- just text, no link\n");
        let err = extract_entry(&mut doc, &items[0], 0, 2).unwrap_err();
        match err {
            RubrixError::MalformedEntry { item_text } => {
                assert_eq!(item_text, "just text, no link");
            }
            other => panic!("expected MalformedEntry, got {other}"),
        }
    }
}
