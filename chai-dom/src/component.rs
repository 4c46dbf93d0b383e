use crate::{BuildError, Props, VNode};

/// A reusable function from props (and children) to a subtree.
pub trait Component {
    /// Name the component is referred to by, e.g. `Card`.
    fn name(&self) -> &str;

    fn render(&self, props: &Props, children: Vec<VNode>) -> Result<VNode, BuildError>;
}

impl Props {
    /// Look up a prop the component cannot do without.
    pub fn require(&self, component: &str, key: &str) -> Result<&str, BuildError> {
        self.get(key).ok_or_else(|| BuildError::MissingProp {
            component: component.to_string(),
            prop: key.to_string(),
        })
    }

    /// Reject any prop not listed in `allowed`.
    pub fn allow_only(&self, component: &str, allowed: &[&str]) -> Result<(), BuildError> {
        match self.attrs.keys().find(|k| !allowed.contains(&k.as_str())) {
            Some(prop) => Err(BuildError::UnknownProp {
                component: component.to_string(),
                prop: prop.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl<F> Component for (&'static str, F)
where
    F: Fn(&Props, Vec<VNode>) -> Result<VNode, BuildError>,
{
    fn name(&self) -> &str {
        self.0
    }
    fn render(&self, props: &Props, children: Vec<VNode>) -> Result<VNode, BuildError> {
        (self.1)(props, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::h;

    fn badge() -> impl Component {
        ("Badge", |props: &Props, _children: Vec<VNode>| -> Result<VNode, BuildError> {
            props.allow_only("Badge", &["label"])?;
            h("span", [("class", "badge")], [props.require("Badge", "label")?])
        })
    }

    #[test]
    fn closure_component_renders() {
        let node = badge()
            .render(&Props::new().set("label", "new"), vec![])
            .unwrap();
        assert_eq!(node.text_content(), "new");
        assert_eq!(badge().name(), "Badge");
    }

    #[test]
    fn unknown_and_missing_props_are_rejected() {
        let err = badge()
            .render(&Props::new().set("label", "x").set("color", "red"), vec![])
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownProp {
                component: "Badge".into(),
                prop: "color".into()
            }
        );

        let err = badge().render(&Props::new(), vec![]).unwrap_err();
        assert!(matches!(err, BuildError::MissingProp { .. }));
    }
}
