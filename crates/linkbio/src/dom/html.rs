//! HTML serialization of document subtrees.

use super::tree::{NodeData, NodeId, Tree};
use super::DomError;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Escapes text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn write_outer(tree: &Tree, id: NodeId, out: &mut String) -> Result<(), DomError> {
    let node = tree.get(id)?;
    match &node.data {
        NodeData::Text(text) => out.push_str(&escape_text(text)),
        NodeData::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attribute(value));
                out.push('"');
            }
            out.push('>');
            if is_void(&element.tag) {
                return Ok(());
            }
            for child in &node.children {
                write_outer(tree, *child, out)?;
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
    Ok(())
}

pub(crate) fn write_inner(tree: &Tree, id: NodeId, out: &mut String) -> Result<(), DomError> {
    for child in &tree.get(id)?.children {
        write_outer(tree, *child, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text("Loja Própria"), "Loja Própria");
    }

    #[test]
    fn test_escape_attribute_quotes() {
        assert_eq!(escape_attribute(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_void_elements() {
        assert!(is_void("img"));
        assert!(is_void("meta"));
        assert!(!is_void("a"));
    }
}
