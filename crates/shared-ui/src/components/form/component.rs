use dioxus::prelude::*;

/// Stacked form layout. Native submission (Enter in a text field) is
/// always swallowed; submitting goes through an explicit button.
#[component]
pub fn Form(id: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "form",
            id: "{id}",
            onsubmit: move |evt| evt.prevent_default(),
            {children}
        }
    }
}
