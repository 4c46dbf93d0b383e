//! Immutable virtual-element descriptors and the builder that produces them.
//!
//! A [`VNode`] is either an [`Element`] (tag, props, ordered children) or a
//! text node. Elements can only be obtained through [`create_element`] (or its
//! shorthand [`h`]), which validates the tag and every attribute name, so a
//! `VNode` in hand is always well formed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod component;
mod error;

pub use component::Component;
pub use error::BuildError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VNode {
    Element(Element),
    Text(String),
}

/// An element node. Fields are private: once built it cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawElement")]
pub struct Element {
    tag: String,
    props: Props,
    children: Vec<VNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props {
    pub attrs: BTreeMap<String, String>,
}

impl Props {
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }
    pub fn set(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.attrs.insert(k.into(), v.into());
        self
    }
    pub fn get(&self, k: &str) -> Option<&str> {
        self.attrs.get(k).map(String::as_str)
    }
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
    pub fn len(&self) -> usize {
        self.attrs.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// Allow concise props creation
impl From<()> for Props {
    fn from(_: ()) -> Self {
        Props::default()
    }
}
impl From<Vec<(&str, &str)>> for Props {
    fn from(v: Vec<(&str, &str)>) -> Self {
        v.into_iter().collect()
    }
}
impl<const N: usize> From<[(&str, &str); N]> for Props {
    fn from(v: [(&str, &str); N]) -> Self {
        v.into_iter().collect()
    }
}
impl From<BTreeMap<String, String>> for Props {
    fn from(attrs: BTreeMap<String, String>) -> Self {
        Props { attrs }
    }
}
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Props {
            attrs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Pass as `children` for an element without any.
pub const NO_CHILDREN: [Child; 0] = [];

/// Anything that can appear in a children list.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Node(VNode),
    /// Spliced into the parent in order.
    Many(Vec<VNode>),
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_string())
    }
}
impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}
impl From<&String> for Child {
    fn from(s: &String) -> Self {
        Child::Text(s.clone())
    }
}
impl From<VNode> for Child {
    fn from(n: VNode) -> Self {
        Child::Node(n)
    }
}
impl From<Vec<VNode>> for Child {
    fn from(v: Vec<VNode>) -> Self {
        Child::Many(v)
    }
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }
    pub fn props(&self) -> &Props {
        &self.props
    }
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.props.get(name)
    }
    pub fn children(&self) -> &[VNode] {
        &self.children
    }
}

impl VNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            VNode::Element(el) => Some(el),
            VNode::Text(_) => None,
        }
    }
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VNode::Text(t) => Some(t),
            VNode::Element(_) => None,
        }
    }
    /// Concatenated text of this node and all descendants, in order.
    pub fn text_content(&self) -> String {
        fn walk(v: &VNode, out: &mut String) {
            match v {
                VNode::Text(t) => out.push_str(t),
                VNode::Element(el) => el.children.iter().for_each(|c| walk(c, out)),
            }
        }
        let mut out = String::new();
        walk(self, &mut out);
        out
    }
}

/// Tag names start with an ASCII letter and continue with ASCII
/// alphanumerics or `-`, `_`, `.`, `:`.
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=' | '{' | '}')
        })
}

/// Build an element node, validating the tag and attribute names.
///
/// String children become text nodes; `Vec<VNode>` children are spliced in
/// place. Inputs are taken by value and copied into the new node.
pub fn create_element<C: Into<Child>>(
    tag: impl Into<String>,
    props: impl Into<Props>,
    children: impl IntoIterator<Item = C>,
) -> Result<VNode, BuildError> {
    build_element(tag.into(), props.into(), children).map(VNode::Element)
}

fn build_element<C: Into<Child>>(
    tag: String,
    props: Props,
    children: impl IntoIterator<Item = C>,
) -> Result<Element, BuildError> {
    if !is_valid_tag(&tag) {
        return Err(BuildError::InvalidTag(tag));
    }
    if let Some(name) = props.attrs.keys().find(|k| !is_valid_attr_name(k)) {
        return Err(BuildError::InvalidAttribute {
            tag,
            name: name.clone(),
        });
    }
    let mut flat = Vec::new();
    for child in children {
        match child.into() {
            Child::Text(t) => flat.push(VNode::Text(t)),
            Child::Node(n) => flat.push(n),
            Child::Many(v) => flat.extend(v),
        }
    }
    tracing::trace!(%tag, attrs = props.len(), children = flat.len(), "built element");
    Ok(Element {
        tag,
        props,
        children: flat,
    })
}

/// Shorthand for [`create_element`].
pub fn h<C: Into<Child>>(
    tag: impl Into<String>,
    props: impl Into<Props>,
    children: impl IntoIterator<Item = C>,
) -> Result<VNode, BuildError> {
    create_element(tag, props, children)
}

pub fn text(t: impl Into<String>) -> VNode {
    VNode::Text(t.into())
}

#[derive(Deserialize)]
struct RawElement {
    tag: String,
    #[serde(default)]
    props: Props,
    #[serde(default)]
    children: Vec<VNode>,
}

impl TryFrom<RawElement> for Element {
    type Error = BuildError;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        build_element(raw.tag, raw.props, raw.children)
    }
}
