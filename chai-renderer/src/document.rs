//! In-memory host document the renderer materializes into.
//!
//! Nodes live in an arena and are addressed by [`NodeId`], an index plus a
//! generation. Removing a node frees its slot for reuse and bumps the slot's
//! generation, so a handle to a removed node stays dead instead of silently
//! pointing at whatever took its place.

use std::collections::BTreeMap;

use chai_dom::{create_element, VNode};

use crate::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    const PLACEHOLDER: NodeId = NodeId {
        index: 0,
        generation: 0,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeData {
    Document,
    Element {
        tag: String,
        attrs: BTreeMap<String, String>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct HostNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<HostNode>,
}

#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty `<html><head></head><body></body></html>` document.
    pub fn new() -> Self {
        let mut doc = Document {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId::PLACEHOLDER,
            head: NodeId::PLACEHOLDER,
            body: NodeId::PLACEHOLDER,
        };
        doc.root = doc.alloc(NodeData::Document);
        let html = doc.create_element("html");
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, html);
        doc.append_child(html, doc.head);
        doc.append_child(html, doc.body);
        doc
    }

    /// Add an empty `<div id=..>` to the body, the usual mount point.
    pub fn with_container(mut self, id: &str) -> Self {
        let div = self.create_element("div");
        self.set_attribute(div, "id", id);
        self.append_child(self.body, div);
        self
    }

    pub fn root(&self) -> NodeId {
        self.root
    }
    pub fn head(&self) -> NodeId {
        self.head
    }
    pub fn body(&self) -> NodeId {
        self.body
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let node = HostNode {
            data,
            parent: None,
            children: Vec::new(),
        };
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index];
        slot.node = Some(node);
        NodeId {
            index,
            generation: slot.generation,
        }
    }

    fn node(&self, id: NodeId) -> Option<&HostNode> {
        self.slots
            .get(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut HostNode> {
        self.slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.node.as_mut())
    }

    /// Free the slot behind `id`, returning its node if it was live.
    fn release(&mut self, id: NodeId) -> Option<HostNode> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|s| s.generation == id.generation)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(node)
    }

    /// A detached element; attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
        })
    }

    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Text(text.to_string()))
    }

    /// Returns `false` if `node` is not a live element.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> bool {
        match self.node_mut(node) {
            Some(HostNode {
                data: NodeData::Element { attrs, .. },
                ..
            }) => {
                attrs.insert(name.to_string(), value.to_string());
                true
            }
            _ => false,
        }
    }

    /// Move `child` to the end of `parent`'s children.
    ///
    /// Returns `false` (and changes nothing) if either node is dead, the
    /// parent is a text node, or `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let parent_ok = matches!(
            self.node(parent).map(|n| &n.data),
            Some(NodeData::Element { .. } | NodeData::Document)
        );
        if !parent_ok || self.node(child).is_none() || self.is_inclusive_ancestor(child, parent) {
            return false;
        }
        self.detach(child);
        if let Some(p) = self.node_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
        true
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.parent(node) {
                Some(p) => node = p,
                None => return false,
            }
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.node_mut(node).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != node);
        }
    }

    /// Detach `node` and drop it together with its subtree.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        self.detach(node);
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(n) = self.release(id) {
                stack.extend(n.children);
            }
        }
    }

    /// Remove every child of `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = self.children(node).to_vec();
        for c in children {
            self.remove(c);
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    /// Whether `node` is alive and reachable from the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(node) && self.is_inclusive_ancestor(self.root, node)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.data {
            NodeData::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attributes(node)?.get(name).map(String::as_str)
    }

    pub fn attributes(&self, node: NodeId) -> Option<&BTreeMap<String, String>> {
        match &self.node(node)?.data {
            NodeData::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }

    /// Payload of a text node.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_text(&self, node: NodeId) -> bool {
        self.text(node).is_some()
    }

    /// Concatenated text of all descendant text nodes in document order.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.walk(node, &mut |id| {
            if let Some(t) = self.text(id) {
                out.push_str(t);
            }
        });
        out
    }

    /// Pre-order traversal of `start` and its descendants.
    fn walk(&self, start: NodeId, f: &mut impl FnMut(NodeId)) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let Some(n) = self.node(id) else { continue };
            f(id);
            stack.extend(n.children.iter().rev());
        }
    }

    /// First connected element whose `id` attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut found = None;
        self.walk(self.root, &mut |node| {
            if found.is_none() && self.attribute(node, "id") == Some(id) {
                found = Some(node);
            }
        });
        found
    }

    /// Connected elements with the given tag, in document order.
    pub fn elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(self.root, &mut |node| {
            if self.tag_name(node) == Some(tag) {
                out.push(node);
            }
        });
        out
    }

    /// Read a host subtree back into a descriptor.
    pub fn to_vnode(&self, node: NodeId) -> Result<VNode, RenderError> {
        let host = self.node(node).ok_or(RenderError::NoSuchNode(node))?;
        match &host.data {
            NodeData::Text(t) => Ok(VNode::Text(t.clone())),
            NodeData::Element { tag, attrs } => {
                let children = host
                    .children
                    .iter()
                    .map(|&c| self.to_vnode(c))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(create_element(tag.as_str(), attrs.clone(), children)?)
            }
            NodeData::Document => Err(RenderError::NoSuchNode(node)),
        }
    }

    /// Number of live nodes, attached or not. The document node counts, so
    /// this is never zero.
    pub fn live_nodes(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}
