use std::fmt::Write;

use crate::{Document, NodeId};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn escape_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

impl Document {
    /// Markup of `node` including its own tag.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    /// Markup of the children of `node`.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for &c in self.children(node) {
            self.write_node(c, &mut out);
        }
        out
    }

    /// The whole document, doctype included.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>");
        out.push_str(&self.inner_html(self.root()));
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        if let Some(t) = self.text(node) {
            escape_text(t, out);
            return;
        }
        let Some(tag) = self.tag_name(node) else {
            return;
        };
        out.push('<');
        out.push_str(tag);
        for (k, v) in self.attributes(node).into_iter().flatten() {
            let _ = write!(out, " {k}=\"");
            escape_attr(v, out);
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&tag) {
            return;
        }
        for &c in self.children(node) {
            self.write_node(c, out);
        }
        let _ = write!(out, "</{tag}>");
    }
}
