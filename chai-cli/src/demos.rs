//! The bundled demo apps.

use chai_dom::{create_element, h, BuildError, Component, Props, VNode, NO_CHILDREN};
use chai_jsx::{JsxContext, JsxError};

pub const ANOTHER_USER: &str = "Chai air react";

/// Profile card taking `username` and an optional `btnText`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Card;

impl Card {
    pub const DEFAULT_BTN_TEXT: &'static str = "visit me";
}

impl Component for Card {
    fn name(&self) -> &str {
        "Card"
    }

    fn render(&self, props: &Props, _children: Vec<VNode>) -> Result<VNode, BuildError> {
        props.allow_only("Card", &["username", "btnText"])?;
        let username = props.require("Card", "username")?;
        let btn_text = props.get("btnText").unwrap_or(Self::DEFAULT_BTN_TEXT);

        let avatar = h(
            "img",
            [
                ("src", "https://images.pexels.com/photos/3532557/pexels-photo-3532557.jpeg"),
                ("alt", "card avatar"),
                ("class", "h-[200px] w-full rounded-t-md object-cover"),
            ],
            NO_CHILDREN,
        )?;
        let body = h(
            "div",
            [("class", "p-4")],
            vec![
                h("h1", [("class", "text-lg font-semibold text-white")], [username])?,
                h(
                    "p",
                    [("class", "mt-3 text-sm text-gray-300")],
                    ["Lorem ipsum dolor sit amet consectetur adipisicing elit."],
                )?,
                h(
                    "button",
                    [
                        ("type", "button"),
                        ("class", "mt-4 rounded-sm bg-white px-2.5 py-1 text-[10px] font-semibold text-black"),
                    ],
                    [btn_text],
                )?,
            ],
        )?;
        h(
            "div",
            [("class", "w-[300px] rounded-md border border-gray-700 bg-black")],
            vec![avatar, body],
        )
    }
}

/// `MyApp`: a heading inside a div.
pub fn custom_app() -> Result<Vec<VNode>, BuildError> {
    Ok(vec![h("div", (), [h("h1", (), ["Custom App !"])?])?])
}

/// The link built with explicit element-creation calls.
pub fn google_link() -> Result<Vec<VNode>, BuildError> {
    let link = create_element(
        "a",
        [("href", "https://google.com"), ("target", "_blank")],
        ["click me to visit google", ANOTHER_USER],
    )?;
    Ok(vec![link])
}

pub const GOOGLE_LINK_JSX: &str = r#"<a href="https://google.com" target='_blank'>Visit Google</a>"#;

pub fn google_link_jsx() -> Result<Vec<VNode>, JsxError> {
    demo_context().parse(GOOGLE_LINK_JSX)
}

pub const TAILWIND_APP_JSX: &str = r#"
<>
  <h1 className='bg-green-400 text-black p-4 rounded-xl mb-4'>Tailwind Test</h1>
  <Card username="Owl-1" btnText="click me" />
  <Card username="Owl-2" btnText="Visit me" />
</>
"#;

/// `App`: a styled heading followed by two cards.
pub fn tailwind_cards() -> Result<Vec<VNode>, BuildError> {
    let heading = h(
        "h1",
        [("class", "bg-green-400 text-black p-4 rounded-xl mb-4")],
        ["Tailwind Test"],
    )?;
    let card = |username: &str, btn_text: &str| {
        Card.render(
            &Props::new().set("username", username).set("btnText", btn_text),
            Vec::new(),
        )
    };
    Ok(vec![heading, card("Owl-1", "click me")?, card("Owl-2", "Visit me")?])
}

pub fn tailwind_cards_jsx() -> Result<Vec<VNode>, JsxError> {
    demo_context().parse(TAILWIND_APP_JSX)
}

/// Scope shared by the JSX demos and the `jsx` command.
pub fn demo_context() -> JsxContext {
    JsxContext::new()
        .bind("anotherUser", ANOTHER_USER)
        .component(Card)
}
