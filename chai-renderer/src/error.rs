use chai_dom::BuildError;

use crate::{MountTarget, NodeId};

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The mount point is not part of the document at render time.
    #[error("mount target {0} does not exist in the document")]
    UnmountedTarget(MountTarget),

    #[error("node {0:?} does not exist in the document")]
    NoSuchNode(NodeId),

    /// A host node could not be read back into a descriptor.
    #[error("cannot read back host node: {0}")]
    ReadBack(#[from] BuildError),
}
