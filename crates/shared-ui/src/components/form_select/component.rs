use dioxus::prelude::*;

/// A themed native select built from a static `(value, label)` list.
///
/// Values may repeat; the browser reports whichever option the user picked
/// by its value only.
#[component]
pub fn FormSelect(
    name: String,
    /// Current selected value.
    #[props(default)]
    value: String,
    options: &'static [(&'static str, &'static str)],
    #[props(default = false)]
    required: bool,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            class: "form-select",
            id: "{name}",
            name: "{name}",
            value: value,
            required: required,
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt);
                }
            },
            for (option_value, option_label) in options.iter() {
                option { value: *option_value, "{option_label}" }
            }
        }
    }
}
