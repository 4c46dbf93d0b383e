//! Single-pass renderer materializing [`VNode`] trees into a host [`Document`].
//!
//! Each render replaces the contents of its mount target. There is no
//! diffing against what was there before.

use std::fmt;

use chai_dom::VNode;

pub mod document;
mod error;
mod html;

pub use document::{Document, NodeId};
pub use error::RenderError;

/// Where a tree gets attached inside a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountTarget {
    /// Looked up with [`Document::get_element_by_id`] at render time.
    Id(String),
    /// A handle the host obtained earlier.
    Node(NodeId),
}

impl MountTarget {
    pub fn id(id: impl Into<String>) -> Self {
        MountTarget::Id(id.into())
    }

    /// The live, connected element this target names, if any. The document
    /// node itself is not a valid target.
    pub fn resolve(&self, doc: &Document) -> Option<NodeId> {
        match self {
            MountTarget::Id(id) => doc.get_element_by_id(id),
            MountTarget::Node(node) => {
                Some(*node).filter(|&n| doc.tag_name(n).is_some() && doc.is_connected(n))
            }
        }
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountTarget::Id(id) => write!(f, "#{id}"),
            MountTarget::Node(node) => write!(f, "{node:?}"),
        }
    }
}

impl From<NodeId> for MountTarget {
    fn from(node: NodeId) -> Self {
        MountTarget::Node(node)
    }
}

impl From<&str> for MountTarget {
    fn from(id: &str) -> Self {
        MountTarget::id(id)
    }
}

/// Summary of what one render pass attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree {
    /// The mount point the roots were attached to.
    pub target: NodeId,
    pub roots: Vec<NodeId>,
    pub node_count: usize,
    pub text_count: usize,
}

/// Backends implement this to expose a consistent API.
pub trait Renderer {
    fn backend_name(&self) -> &'static str;

    /// Replace the contents of `target` with `nodes`, in order.
    fn mount(&mut self, nodes: &[VNode], target: &MountTarget) -> Result<RenderTree, RenderError>;
}

pub const BACKEND: &str = "document";

pub fn backend_name() -> &'static str {
    BACKEND
}

fn materialize(doc: &mut Document, v: &VNode, counts: &mut (usize, usize)) -> NodeId {
    counts.0 += 1;
    match v {
        VNode::Text(t) => {
            counts.1 += 1;
            doc.create_text_node(t)
        }
        VNode::Element(el) => {
            let node = doc.create_element(el.tag());
            for (k, val) in el.props().iter() {
                doc.set_attribute(node, k, val);
            }
            for c in el.children() {
                let child = materialize(doc, c, counts);
                doc.append_child(node, child);
            }
            tracing::trace!(tag = el.tag(), ?node, "materialized element");
            node
        }
    }
}

impl Renderer for Document {
    fn backend_name(&self) -> &'static str {
        BACKEND
    }

    fn mount(&mut self, nodes: &[VNode], target: &MountTarget) -> Result<RenderTree, RenderError> {
        let Some(mount) = target.resolve(self) else {
            tracing::warn!(%target, "mount target not found");
            return Err(RenderError::UnmountedTarget(target.clone()));
        };
        // Build detached first so the target is only touched once everything exists.
        let mut counts = (0, 0);
        let roots: Vec<NodeId> = nodes
            .iter()
            .map(|v| materialize(self, v, &mut counts))
            .collect();
        self.clear_children(mount);
        for &r in &roots {
            self.append_child(mount, r);
        }
        tracing::debug!(
            %target,
            roots = roots.len(),
            nodes = counts.0,
            texts = counts.1,
            "rendered tree"
        );
        Ok(RenderTree {
            target: mount,
            roots,
            node_count: counts.0,
            text_count: counts.1,
        })
    }
}

/// Materialize `vnode` and make it the only content of `target`.
pub fn render(
    vnode: &VNode,
    doc: &mut Document,
    target: &MountTarget,
) -> Result<RenderTree, RenderError> {
    doc.mount(std::slice::from_ref(vnode), target)
}

/// Like [`render`] for a fragment of several sibling roots.
pub fn render_many(
    nodes: &[VNode],
    doc: &mut Document,
    target: &MountTarget,
) -> Result<RenderTree, RenderError> {
    doc.mount(nodes, target)
}

/// A mount target bound to a document, rendered into repeatedly.
#[derive(Debug)]
pub struct Root<'d, R: Renderer = Document> {
    renderer: &'d mut R,
    target: MountTarget,
}

pub fn create_root<R: Renderer>(renderer: &mut R, target: impl Into<MountTarget>) -> Root<'_, R> {
    Root {
        renderer,
        target: target.into(),
    }
}

impl<R: Renderer> Root<'_, R> {
    pub fn render(&mut self, vnode: &VNode) -> Result<RenderTree, RenderError> {
        self.renderer.mount(std::slice::from_ref(vnode), &self.target)
    }

    pub fn render_many(&mut self, nodes: &[VNode]) -> Result<RenderTree, RenderError> {
        self.renderer.mount(nodes, &self.target)
    }

    pub fn target(&self) -> &MountTarget {
        &self.target
    }
}
