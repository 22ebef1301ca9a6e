use dioxus::prelude::*;

/// A named multi-line input. Grows vertically only.
#[component]
pub fn Textarea(
    name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        textarea {
            class: "textarea",
            id: "{name}",
            name: "{name}",
            rows: "{rows}",
            value: value,
            placeholder: placeholder,
            oninput: move |evt| on_input.call(evt),
        }
    }
}
