//! Markdown-to-DOM rendering.
//!
//! Renders awesome-list markdown into a mutable HTML DOM (`scraper::Html`)
//! that the extraction passes consume destructively. The markdown dialect is
//! plain CommonMark via `pulldown-cmark` — awesome lists only use headings,
//! bullet lists, and inline links, so no extensions are enabled.

use std::path::Path;

use pulldown_cmark::{Options, Parser, html};
use scraper::Html;
use tracing::debug;

use rubrix_shared::{Result, RubrixError};

/// Render markdown source text into an HTML DOM.
///
/// The returned document is a parsed fragment; its `tree` is mutable, which
/// is what lets downstream passes detach headings and lists as they are
/// captured.
pub fn render(source: &str) -> Html {
    let parser = Parser::new_ext(source, Options::empty());
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser);

    debug!(
        source_len = source.len(),
        html_len = out.len(),
        "markdown rendered"
    );

    Html::parse_fragment(&out)
}

/// Read a markdown file and render it into an HTML DOM.
pub fn render_file(path: &Path) -> Result<Html> {
    let source = std::fs::read_to_string(path).map_err(|e| RubrixError::io(path, e))?;
    Ok(render(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn render_headings_and_lists() {
        let doc = render("## Contents\n\n- [A](#a)\n- [B](#b)\n");

        let h2 = Selector::parse("h2").unwrap();
        let heading = doc.select(&h2).next().expect("h2 rendered");
        assert_eq!(heading.text().collect::<String>(), "Contents");

        let li = Selector::parse("ul > li").unwrap();
        assert_eq!(doc.select(&li).count(), 2);
    }

    #[test]
    fn render_nested_list_nests_ul_inside_li() {
        let doc = render("- [Parent](#p)\n  - [Child](#c)\n");

        let nested = Selector::parse("li > ul > li > a").unwrap();
        let child = doc.select(&nested).next().expect("nested anchor");
        assert_eq!(child.value().attr("href"), Some("#c"));
    }

    #[test]
    fn render_keeps_link_targets() {
        let doc = render("- [Tool](https://tool.example.com) - does things.\n");

        let a = Selector::parse("a").unwrap();
        let anchor = doc.select(&a).next().expect("anchor rendered");
        assert_eq!(anchor.value().attr("href"), Some("https://tool.example.com"));
        assert_eq!(anchor.text().collect::<String>(), "Tool");
    }

    #[test]
    fn render_file_missing_path_is_io_error() {
        let err = render_file(Path::new("/nonexistent/awesome.md")).unwrap_err();
        assert!(matches!(err, RubrixError::Io { .. }));
    }
}
