//! Visible text extraction from HTML
//!
//! Drops `script`, `style`, `nav`, `footer` and `noscript` subtrees, then
//! emits every remaining text node trimmed, one per line.

use ego_tree::iter::Edge;
use scraper::{Html, Node};

/// Elements whose whole subtree is not page content
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "nav", "footer", "noscript"];

/// Extract the visible text of an HTML document
#[must_use]
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines: Vec<&str> = Vec::new();
    let mut skip_depth = 0usize;

    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element)
                    if skip_depth > 0 || SKIPPED_ELEMENTS.contains(&element.name()) =>
                {
                    skip_depth += 1;
                }
                Node::Text(text) if skip_depth == 0 => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        lines.push(trimmed);
                    }
                }
                _ => {}
            },
            Edge::Close(node) => {
                if skip_depth > 0 && node.value().is_element() {
                    skip_depth -= 1;
                }
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_content_elements() {
        let html = r#"<!DOCTYPE html>
<html><head><title>Open Day</title><style>body { color: red; }</style></head>
<body>
  <nav><a href="/">Home</a></nav>
  <h1>Open Day</h1>
  <p>Meet the <b>faculty</b> on Saturday.</p>
  <script>var tracking = 1;</script>
  <noscript>Enable JS</noscript>
  <footer>Copyright</footer>
</body></html>"#;
        let text = extract_visible_text(html);
        assert_eq!(text, "Open Day\nOpen Day\nMeet the\nfaculty\non Saturday.");
    }

    #[test]
    fn nested_skipped_elements() {
        let html = "<body><nav><div><p>menu</p></div></nav><p>after</p></body>";
        assert_eq!(extract_visible_text(html), "after");
    }

    #[test]
    fn empty_document() {
        assert_eq!(extract_visible_text(""), "");
    }

    #[test]
    fn keeps_cyrillic_text() {
        let html = "<p>День открытых дверей</p><p>  Регистрация  </p>";
        assert_eq!(extract_visible_text(html), "День открытых дверей\nРегистрация");
    }
}
