//! JSX-sugar entry point: parse a small JSX subset into [`chai_dom::VNode`]s.
//!
//! Output is structurally identical to building the same tree by hand with
//! [`chai_dom::create_element`].

mod entities;
mod error;
mod parser;
mod whitespace;

pub use error::JsxError;
pub use parser::{parse_jsx, JsxContext};
