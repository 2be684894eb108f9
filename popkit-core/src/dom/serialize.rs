// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML serialization of the visual tree.
//!
//! Raw inner markup is emitted verbatim, followed by the serialized children.

use super::node::{Node, NodeKind};

/// Escape a value for use inside a double-quoted attribute.
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

/// Escape character data of a text node.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(super) fn write_node(node: &Node, out: &mut String) {
    let data = node.data();
    match &data.kind {
        NodeKind::Text(text) => out.push_str(&escape_text(text)),
        NodeKind::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);

            if !element.classes.is_empty() {
                let classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
                out.push_str(" class=\"");
                out.push_str(&escape_attribute(&classes.join(" ")));
                out.push('"');
            }

            if !element.style.is_empty() {
                let declarations: Vec<String> = element
                    .style
                    .iter()
                    .map(|(name, value)| format!("{}: {};", name, value))
                    .collect();
                out.push_str(" style=\"");
                out.push_str(&escape_attribute(&declarations.join(" ")));
                out.push('"');
            }

            out.push('>');
            out.push_str(&element.inner_html);
            for child in &data.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}
