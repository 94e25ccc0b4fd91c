//! Thin operations over the mutable HTML DOM.
//!
//! Wraps the `ego_tree` arena behind `scraper::Html` with the handful of
//! primitives the extraction passes need: find-first by tag, direct-child
//! collection, destructive detach, visible text, and outer-HTML
//! serialization. A detached node stays in the arena with its subtree
//! intact, so a captured list or anchor remains addressable by id — it just
//! no longer shows up when scanning from the document root.

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node};

/// Id of the document root, the scope for whole-document scans.
pub fn root(doc: &Html) -> NodeId {
    doc.tree.root().id()
}

/// Find the first descendant element with the given tag name, in document
/// order. The scope node itself is never a match.
pub fn find_element(doc: &Html, scope: NodeId, tag: &str) -> Option<NodeId> {
    let scope = doc.tree.get(scope)?;
    scope
        .descendants()
        .skip(1)
        .find(|node| has_tag(node.value(), tag))
        .map(|node| node.id())
}

/// Find the first descendant element with the given tag name whose trimmed
/// visible text equals `text`.
pub fn find_element_with_text(doc: &Html, scope: NodeId, tag: &str, text: &str) -> Option<NodeId> {
    let scope = doc.tree.get(scope)?;
    scope
        .descendants()
        .skip(1)
        .filter(|node| has_tag(node.value(), tag))
        .find(|node| visible_text(doc, node.id()).trim() == text)
        .map(|node| node.id())
}

/// Find the first `<a href=…>` descendant of `scope`, in document order.
pub fn find_anchor(doc: &Html, scope: NodeId) -> Option<NodeId> {
    let scope = doc.tree.get(scope)?;
    scope
        .descendants()
        .skip(1)
        .find(|node| {
            node.value()
                .as_element()
                .is_some_and(|el| el.name() == "a" && el.attr("href").is_some())
        })
        .map(|node| node.id())
}

/// Collect the direct child elements of `scope` with the given tag name, in
/// document order. Children of nested elements are not visited.
pub fn child_elements(doc: &Html, scope: NodeId, tag: &str) -> Vec<NodeId> {
    match doc.tree.get(scope) {
        Some(scope) => scope
            .children()
            .filter(|node| has_tag(node.value(), tag))
            .map(|node| node.id())
            .collect(),
        None => Vec::new(),
    }
}

/// Detach a node (and its subtree) from its parent.
pub fn detach(doc: &mut Html, id: NodeId) {
    if let Some(mut node) = doc.tree.get_mut(id) {
        node.detach();
    }
}

/// Concatenated text of a node's descendants, untrimmed.
pub fn visible_text(doc: &Html, id: NodeId) -> String {
    let mut out = String::new();
    if let Some(node) = doc.tree.get(id) {
        for descendant in node.descendants() {
            if let Some(text) = descendant.value().as_text() {
                out.push_str(text);
            }
        }
    }
    out
}

/// Serialized outer HTML of an element, including its own tag. Works on
/// detached nodes.
pub fn outer_html(doc: &Html, id: NodeId) -> String {
    doc.tree
        .get(id)
        .and_then(ElementRef::wrap)
        .map(|el| el.html())
        .unwrap_or_default()
}

/// An element's attribute value, owned.
pub fn attr(doc: &Html, id: NodeId, name: &str) -> Option<String> {
    doc.tree
        .get(id)?
        .value()
        .as_element()?
        .attr(name)
        .map(str::to_owned)
}

fn has_tag(node: &Node, tag: &str) -> bool {
    node.as_element().is_some_and(|el| el.name() == tag)
}
