//! Unordered-list discovery and folding.
//!
//! A folded list is a sequence of (item, children) pairs: each direct
//! `<li>` of the list, paired with the recursively folded items of its own
//! nested `<ul>` if it has one. The pairing — not the items alone — is what
//! entry extraction consumes to build entry trees.

use scraper::Html;
use ego_tree::NodeId;
use tracing::trace;

use crate::dom;

/// A list item paired with the folded items of its own nested list.
#[derive(Debug, Clone)]
pub struct FoldedItem {
    /// The `<li>` element. Its nested `<ul>` (if any) has already been
    /// detached by the fold.
    pub node: NodeId,
    /// Folded items of the nested list, empty for leaves.
    pub children: Vec<FoldedItem>,
}

/// Find the first `<ul>` under `scope` and detach it, returning its id.
///
/// Returns `None` when no list remains under the scope.
pub fn find_list(doc: &mut Html, scope: NodeId) -> Option<NodeId> {
    let list = dom::find_element(doc, scope, "ul")?;
    dom::detach(doc, list);
    Some(list)
}

/// Fold a list's direct `<li>` children into (item, children) pairs.
///
/// With `ignore_sub_lists` every item is returned as a leaf and nested
/// lists are left in place — an optional non-recursive path, not used by
/// the main pipeline. Otherwise each item is probed for a nested list of
/// its own, which is detached and folded recursively.
pub fn fold_items(doc: &mut Html, list: NodeId, ignore_sub_lists: bool) -> Vec<FoldedItem> {
    let items = dom::child_elements(doc, list, "li");

    if ignore_sub_lists {
        return items
            .into_iter()
            .map(|node| FoldedItem {
                node,
                children: Vec::new(),
            })
            .collect();
    }

    items
        .into_iter()
        .map(|node| {
            let children = match find_list(doc, node) {
                Some(nested) => fold_items(doc, nested, false),
                None => Vec::new(),
            };
            trace!(child_count = children.len(), "list item folded");
            FoldedItem { node, children }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(md: &str) -> Html {
        rubrix_markdown::render(md)
    }

    #[test]
    fn find_list_detaches_first_list() {
        let mut doc = render("first\n\n- [A](#a)\n\ntext\n\n- [B](#b)\n");
        let root = dom::root(&doc);

        let first = find_list(&mut doc, root).expect("first list");
        assert_eq!(dom::visible_text(&doc, first).trim(), "A");

        // The second list is now "the first remaining" one.
        let second = find_list(&mut doc, root).expect("second list");
        assert_eq!(dom::visible_text(&doc, second).trim(), "B");

        assert!(find_list(&mut doc, root).is_none());
    }

    #[test]
    fn fold_items_flat_list() {
        let mut doc = render("- [A](#a)\n- [B](#b)\n- [C](#c)\n");
        let root = dom::root(&doc);
        let list = find_list(&mut doc, root).expect("list");

        let items = fold_items(&mut doc, list, false);
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item.children.is_empty()));
    }

    #[test]
    fn fold_items_recurses_into_nested_lists() {
        let md = "- [P](#p)\n  - [C1](#c1)\n  - [C2](#c2)\n    - [G](#g)\n- [Q](#q)\n";
        let mut doc = render(md);
        let root = dom::root(&doc);
        let list = find_list(&mut doc, root).expect("list");

        let items = fold_items(&mut doc, list, false);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].children.len(), 2);
        assert_eq!(items[0].children[1].children.len(), 1);
        assert!(items[1].children.is_empty());
    }

    #[test]
    fn fold_items_ignore_sub_lists_yields_leaves() {
        let mut doc = render("- [P](#p)\n  - [C](#c)\n");
        let root = dom::root(&doc);
        let list = find_list(&mut doc, root).expect("list");

        let items = fold_items(&mut doc, list, true);
        assert_eq!(items.len(), 1);
        assert!(items[0].children.is_empty());
        // The nested list stays attached to the item.
        assert!(dom::find_element(&doc, items[0].node, "ul").is_some());
    }
}
