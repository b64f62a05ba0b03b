use sycamore::prelude::*;

/// Root component of the application. The bootstrap renders this once
/// into the page's anchor element, everything below here is driven by
/// the framework.
#[component]
pub fn App<G: Html>(cx: Scope) -> View<G> {
    view! { cx,
        main {
            h1 { "App" }
            p { "Application shell is up." }
        }
    }
}
