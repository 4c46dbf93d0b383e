use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chai_dom::{create_element, Component, Props, VNode};
use pest::iterators::{Pair, Pairs};
use pest::Parser;

use crate::entities::decode_entities;
use crate::whitespace::clean_jsx_text;
use crate::JsxError;

#[derive(pest_derive::Parser)]
#[grammar = "jsx.pest"]
struct JsxParser;

/// Identifiers and components visible to a JSX source.
#[derive(Default)]
pub struct JsxContext {
    scope: BTreeMap<String, String>,
    components: HashMap<String, Box<dyn Component>>,
}

impl fmt::Debug for JsxContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsxContext")
            .field("scope", &self.scope)
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Parse a source that uses no identifiers or components.
pub fn parse_jsx(source: &str) -> Result<Vec<VNode>, JsxError> {
    JsxContext::new().parse(source)
}

impl JsxContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `{name}` evaluate to `value`.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.scope.insert(name.into(), value.into());
        self
    }

    /// Register a component under its [`Component::name`].
    pub fn component(mut self, component: impl Component + 'static) -> Self {
        self.components
            .insert(component.name().to_string(), Box::new(component));
        self
    }

    /// Parse `source` into its root nodes. Fragments are spliced, so
    /// `<><a/><b/></>` yields two roots.
    pub fn parse(&self, source: &str) -> Result<Vec<VNode>, JsxError> {
        let mut pairs =
            JsxParser::parse(Rule::document, source).map_err(|e| JsxError::Syntax(e.to_string()))?;
        let document = pairs
            .next()
            .ok_or_else(|| JsxError::Syntax("empty document".to_string()))?;

        let mut roots = Vec::new();
        self.convert_nodes(document.into_inner(), &mut roots)?;
        roots.retain(|n| !matches!(n, VNode::Text(t) if t.trim().is_empty()));
        tracing::debug!(roots = roots.len(), "parsed jsx");
        Ok(roots)
    }

    /// Parse a source that must produce exactly one root.
    pub fn parse_one(&self, source: &str) -> Result<VNode, JsxError> {
        let mut roots = self.parse(source)?;
        if roots.len() != 1 {
            return Err(JsxError::ExpectedSingleRoot(roots.len()));
        }
        Ok(roots.remove(0))
    }

    fn convert_nodes(&self, pairs: Pairs<'_, Rule>, out: &mut Vec<VNode>) -> Result<(), JsxError> {
        for pair in pairs {
            self.convert_node(pair, out)?;
        }
        Ok(())
    }

    fn convert_node(&self, pair: Pair<'_, Rule>, out: &mut Vec<VNode>) -> Result<(), JsxError> {
        match pair.as_rule() {
            Rule::element | Rule::self_closing => out.push(self.convert_element(pair)?),
            Rule::fragment => self.convert_nodes(pair.into_inner(), out)?,
            // `{}` renders nothing
            Rule::expr_child if pair.clone().into_inner().next().is_none() => {}
            Rule::expr_child => out.push(VNode::Text(self.eval(pair)?)),
            Rule::text => {
                if let Some(t) = clean_jsx_text(pair.as_str()) {
                    out.push(VNode::Text(decode_entities(&t)));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn convert_element(&self, pair: Pair<'_, Rule>) -> Result<VNode, JsxError> {
        let self_closing = pair.as_rule() == Rule::self_closing;
        let mut inner = pair.into_inner();

        // element = open_tag node* close_tag; self_closing = tag_name attributes
        let (tag, attrs) = if self_closing {
            (next_str(&mut inner), inner.next())
        } else {
            let mut open = inner.next().map(Pair::into_inner).into_iter().flatten();
            let tag = open.next().map(|p| p.as_str().to_string()).unwrap_or_default();
            (tag, open.next())
        };
        let is_component = tag.starts_with(|c: char| c.is_ascii_uppercase());
        let props = self.convert_attributes(attrs, is_component)?;

        let mut children = Vec::new();
        if !self_closing {
            for p in inner {
                if p.as_rule() != Rule::close_tag {
                    self.convert_node(p, &mut children)?;
                    continue;
                }
                let close = p.into_inner().next().map(|t| t.as_str()).unwrap_or_default();
                if close != tag {
                    return Err(JsxError::MismatchedTag {
                        open: tag,
                        close: close.to_string(),
                    });
                }
            }
        }

        if is_component {
            let component = self
                .components
                .get(&tag)
                .ok_or_else(|| JsxError::UnknownComponent(tag.clone()))?;
            tracing::trace!(%tag, "rendering component");
            return Ok(component.render(&props, children)?);
        }
        Ok(create_element(tag, props, children)?)
    }

    fn convert_attributes(
        &self,
        attrs: Option<Pair<'_, Rule>>,
        is_component: bool,
    ) -> Result<Props, JsxError> {
        let mut props = Props::new();
        for attr in attrs.into_iter().flat_map(Pair::into_inner) {
            let mut parts = attr.into_inner();
            let name = next_str(&mut parts);
            let value = match parts.next() {
                Some(v) if v.as_rule() == Rule::string => decode_entities(&string_value(v)),
                Some(v) => self.eval(v)?,
                None if is_component => "true".to_string(),
                None => String::new(),
            };
            let name = if is_component {
                name
            } else {
                dom_attr_name(&name).unwrap_or(name)
            };
            props.attrs.insert(name, value);
        }
        Ok(props)
    }

    /// Evaluate an `{expr}` pair: a string literal or a bound identifier.
    /// Literals are taken as written, without entity decoding.
    fn eval(&self, pair: Pair<'_, Rule>) -> Result<String, JsxError> {
        let Some(inner) = pair.into_inner().next() else {
            return Ok(String::new());
        };
        match inner.as_rule() {
            Rule::string => Ok(string_value(inner)),
            _ => {
                let name = inner.as_str();
                self.scope
                    .get(name)
                    .cloned()
                    .ok_or_else(|| JsxError::UnboundIdentifier(name.to_string()))
            }
        }
    }
}

fn next_str(pairs: &mut Pairs<'_, Rule>) -> String {
    pairs.next().map(|p| p.as_str().to_string()).unwrap_or_default()
}

fn string_value(pair: Pair<'_, Rule>) -> String {
    pair.into_inner()
        .next()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

/// JSX prop names that differ from their markup attribute.
fn dom_attr_name(jsx: &str) -> Option<String> {
    match jsx {
        "className" => Some("class".to_string()),
        "htmlFor" => Some("for".to_string()),
        _ => None,
    }
}
