use chai_dom::{create_element, h, text, VNode, NO_CHILDREN};
use chai_renderer::{render, Document, MountTarget, RenderError};
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
fn link_renders_with_attributes_and_text() {
    let mut doc = Document::new().with_container("root");
    let tree = render(&google_link(), &mut doc, &MountTarget::id("root")).unwrap();

    let link = tree.roots[0];
    assert_eq!(doc.tag_name(link), Some("a"));
    assert_eq!(doc.attribute(link, "href"), Some("https://google.com"));
    assert_eq!(doc.attribute(link, "target"), Some("_blank"));
    assert_eq!(doc.children(link).len(), 2);
    assert_eq!(doc.text_content(link), "click me to visit googleChai air react");
    assert_eq!(
        doc.inner_html(tree.target),
        r#"<a href="https://google.com" target="_blank">click me to visit googleChai air react</a>"#
    );
}

#[test]
fn rendered_tree_reads_back_equal() {
    let tree = h(
        "section",
        [("class", "bg-green-400 text-black p-4"), ("data-x", "1")],
        vec![
            h("h1", (), ["Title"]).unwrap(),
            text("between"),
            h("ul", (), vec![h("li", (), ["a"]).unwrap(), h("li", (), ["b"]).unwrap()]).unwrap(),
            h("img", [("src", "/vite.svg")], NO_CHILDREN).unwrap(),
        ],
    )
    .unwrap();
    let mut doc = Document::new().with_container("root");
    let mounted = render(&tree, &mut doc, &MountTarget::id("root")).unwrap();
    assert_eq!(doc.to_vnode(mounted.roots[0]).unwrap(), tree);
}

#[test]
fn second_render_replaces_instead_of_merging() {
    let mut doc = Document::new().with_container("root");
    let target = MountTarget::id("root");
    let first = render(&google_link(), &mut doc, &target).unwrap();
    let second_tree = h("p", (), ["replacement"]).unwrap();
    let second = render(&second_tree, &mut doc, &target).unwrap();

    let root = doc.get_element_by_id("root").unwrap();
    assert_eq!(doc.children(root), second.roots.as_slice());
    assert_eq!(doc.text_content(root), "replacement");
    assert!(doc.elements_by_tag_name("a").is_empty());
    assert!(!doc.contains(first.roots[0]), "old nodes are dropped");
}

#[test]
fn missing_target_fails_without_touching_the_document() {
    let mut doc = Document::new().with_container("root");
    let before_html = doc.to_html();
    let before_len = doc.live_nodes();

    let err = render(&google_link(), &mut doc, &MountTarget::id("nope")).unwrap_err();

    assert_eq!(err, RenderError::UnmountedTarget(MountTarget::id("nope")));
    assert_eq!(doc.to_html(), before_html);
    assert_eq!(doc.live_nodes(), before_len);
    assert!(doc.elements_by_tag_name("a").is_empty());
}

#[test]
fn removed_or_detached_node_targets_are_unmounted() {
    let mut doc = Document::new().with_container("root");
    let root = doc.get_element_by_id("root").unwrap();
    doc.remove(root);
    let err = render(&google_link(), &mut doc, &MountTarget::Node(root)).unwrap_err();
    assert!(matches!(err, RenderError::UnmountedTarget(MountTarget::Node(_))));

    let floating = doc.create_element("div");
    let err = render(&google_link(), &mut doc, &floating.into()).unwrap_err();
    assert!(matches!(err, RenderError::UnmountedTarget(_)));
    assert!(doc.children(floating).is_empty());
}

#[test]
fn node_handle_target_renders() {
    let mut doc = Document::new();
    let body = doc.body();
    render(&text("plain"), &mut doc, &body.into()).unwrap();
    assert_eq!(doc.inner_html(body), "plain");
}

#[test]
fn error_message_names_the_target() {
    let err = RenderError::UnmountedTarget(MountTarget::id("root"));
    assert_eq!(err.to_string(), "mount target #root does not exist in the document");
}

#[test]
fn document_node_is_not_a_mount_target() {
    let mut doc = Document::new();
    let before_html = doc.to_html();
    let target = MountTarget::Node(doc.root());

    let err = render(&google_link(), &mut doc, &target).unwrap_err();

    assert_eq!(err, RenderError::UnmountedTarget(target));
    assert_eq!(doc.to_html(), before_html);
    assert!(doc.is_connected(doc.body()));
    assert!(doc.is_connected(doc.head()));
}

#[test]
fn stale_handles_stay_dead_after_slot_reuse() {
    let mut doc = Document::new().with_container("root");
    let first = render(&google_link(), &mut doc, &MountTarget::id("root")).unwrap();
    let live = doc.live_nodes();
    for _ in 0..20 {
        render(&google_link(), &mut doc, &MountTarget::id("root")).unwrap();
    }
    assert_eq!(doc.live_nodes(), live);
    assert!(!doc.contains(first.roots[0]));
    assert_eq!(doc.tag_name(first.roots[0]), None);
    assert_eq!(doc.elements_by_tag_name("a").len(), 1);
}
