/// Errors raised while constructing a [`VNode`](crate::VNode).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The tag is empty or is not a valid node-kind identifier.
    #[error("invalid tag {0:?}")]
    InvalidTag(String),

    /// An attribute name that could never appear in markup.
    #[error("invalid attribute name {name:?} on <{tag}>")]
    InvalidAttribute { tag: String, name: String },

    /// A component was handed a prop it does not declare.
    #[error("component {component} does not accept prop {prop:?}")]
    UnknownProp { component: String, prop: String },

    #[error("component {component} requires prop {prop:?}")]
    MissingProp { component: String, prop: String },
}
