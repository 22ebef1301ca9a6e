use dioxus::prelude::*;

/// Submit control for forms whose request runs outside the native submit.
///
/// Renders `type="button"` so pressing it never triggers a page navigation.
/// While `busy`, the label switches to `busy_label`; the control is
/// disabled whenever `busy` or `disabled` is set.
#[derive(Props, Clone, PartialEq)]
pub struct SubmitButtonProps {
    pub label: String,
    pub busy_label: String,
    #[props(default = false)]
    pub busy: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn SubmitButton(props: SubmitButtonProps) -> Element {
    let inactive = props.busy || props.disabled;
    let text = if props.busy {
        props.busy_label.clone()
    } else {
        props.label.clone()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            class: "submit-button",
            "data-busy": props.busy,
            disabled: inactive,
            onclick: move |evt| {
                if inactive {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            "{text}"
        }
    }
}
