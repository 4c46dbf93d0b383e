use chai_dom::{create_element, h, text, BuildError, Child, Props, VNode, NO_CHILDREN};
use pretty_assertions::assert_eq;

fn google_link() -> VNode {
    create_element(
        "a",
        [("href", "https://google.com"), ("target", "_blank")],
        ["click me to visit google", "Chai air react"],
    )
    .unwrap()
}

#[test]
fn captures_tag_attrs_and_children_in_order() {
    let VNode::Element(el) = google_link() else {
        panic!("expected element");
    };
    assert_eq!(el.tag(), "a");
    assert_eq!(el.attr("href"), Some("https://google.com"));
    assert_eq!(el.attr("target"), Some("_blank"));
    assert_eq!(el.props().len(), 2);
    assert_eq!(
        el.children(),
        &[text("click me to visit google"), text("Chai air react")]
    );
}

#[test]
fn identical_inputs_build_equal_trees() {
    assert_eq!(google_link(), google_link());
}

#[test]
fn empty_tag_is_rejected() {
    let err = create_element("", (), ["text"]).unwrap_err();
    assert_eq!(err, BuildError::InvalidTag(String::new()));
}

#[test]
fn malformed_tags_are_rejected() {
    for tag in ["1h", " a", "a b", "<a>", "-x"] {
        assert!(
            matches!(h(tag, (), NO_CHILDREN), Err(BuildError::InvalidTag(_))),
            "{tag:?} should be rejected"
        );
    }
}

#[test]
fn invalid_attribute_name_is_rejected() {
    let err = h("div", [("on click", "x")], NO_CHILDREN).unwrap_err();
    assert_eq!(
        err,
        BuildError::InvalidAttribute {
            tag: "div".into(),
            name: "on click".into()
        }
    );
}

#[test]
fn mixed_children_are_flattened_in_order() {
    let items = vec![
        h("li", (), ["one"]).unwrap(),
        h("li", (), ["two"]).unwrap(),
    ];
    let list = h(
        "ul",
        Props::new().set("class", "list"),
        vec![
            Child::from("head"),
            Child::from(items),
            Child::from(h("li", (), ["three"]).unwrap()),
        ],
    )
    .unwrap();
    let el = list.as_element().unwrap();
    assert_eq!(el.children().len(), 4);
    assert_eq!(el.children()[0].as_text(), Some("head"));
    assert_eq!(list.text_content(), "headonetwothree");
}

#[test]
fn deep_nesting_is_supported() {
    let mut node = text("leaf");
    for _ in 0..200 {
        node = h("div", (), [node]).unwrap();
    }
    assert_eq!(node.text_content(), "leaf");
}

#[test]
fn inputs_are_copied_not_borrowed() {
    let props = Props::new().set("id", "x");
    let a = h("div", props.clone(), NO_CHILDREN).unwrap();
    let b = h("div", props.clone().set("id", "y"), NO_CHILDREN).unwrap();
    assert_eq!(props.get("id"), Some("x"));
    assert_eq!(a.as_element().unwrap().attr("id"), Some("x"));
    assert_eq!(b.as_element().unwrap().attr("id"), Some("y"));
}

#[test]
fn json_shape_round_trips() {
    let json = serde_json::to_value(google_link()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "element": {
                "tag": "a",
                "props": { "href": "https://google.com", "target": "_blank" },
                "children": [
                    { "text": "click me to visit google" },
                    { "text": "Chai air react" }
                ]
            }
        })
    );
    let back: VNode = serde_json::from_value(json).unwrap();
    assert_eq!(back, google_link());
}

#[test]
fn deserializing_revalidates() {
    let bad = serde_json::json!({ "element": { "tag": "", "children": [] } });
    let err = serde_json::from_value::<VNode>(bad).unwrap_err();
    assert!(err.to_string().contains("invalid tag"));

    let bad_attr = serde_json::json!({ "element": { "tag": "p", "props": { "a b": "1" } } });
    assert!(serde_json::from_value::<VNode>(bad_attr).is_err());
}
