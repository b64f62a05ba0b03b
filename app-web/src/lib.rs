use app::App;
use sycamore::prelude::*;

mod error;

pub use error::{Error, Result};

/// Id of the element in the HTML shell the application mounts into.
pub const ANCHOR_ID: &str = "root";

#[derive(Prop)]
pub struct StrictModeProps<'a, G: Html> {
    children: Children<'a, G>,
}

/// Development-only wrapper around the application root. In release
/// builds it renders its children unchanged.
#[component]
pub fn StrictMode<'a, G: Html>(cx: Scope<'a>, props: StrictModeProps<'a, G>) -> View<G> {
    if cfg!(debug_assertions) {
        tracing::debug!("strict mode active, running development checks");
    }
    props.children.call(cx)
}

/// Looks up the anchor element the application is rendered into.
pub fn anchor_element(document: &web_sys::Document) -> Result<web_sys::Element> {
    document
        .get_element_by_id(ANCHOR_ID)
        .ok_or(Error::MissingAnchorElement(ANCHOR_ID))
}

/// Mounts the application into the anchor element of the current
/// document. Renders exactly once, updates after that are owned by
/// the framework. Errors before any render happened.
pub fn bootstrap() -> Result<()> {
    let document = web_sys::window()
        .ok_or(Error::MissingWindow)?
        .document()
        .ok_or(Error::MissingDocument)?;
    let root = anchor_element(&document)?;

    sycamore::render_to(|cx| view! { cx, StrictMode { App() } }, &root);

    Ok(())
}
