use dioxus::prelude::*;

/// A named single-line input for signup forms.
///
/// `name` doubles as the element id so labels and tests can target it.
#[component]
pub fn Input(
    name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            id: "{name}",
            name: "{name}",
            value: value,
            placeholder: placeholder,
            required: required,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}
