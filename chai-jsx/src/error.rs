use chai_dom::BuildError;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsxError {
    #[error("jsx syntax error:\n{0}")]
    Syntax(String),

    #[error("expected </{open}> but found </{close}>")]
    MismatchedTag { open: String, close: String },

    /// `{name}` with nothing bound to `name`.
    #[error("unbound identifier {0:?}")]
    UnboundIdentifier(String),

    #[error("unknown component <{0}>")]
    UnknownComponent(String),

    #[error("expected a single root node, found {0}")]
    ExpectedSingleRoot(usize),

    #[error(transparent)]
    Build(#[from] BuildError),
}
