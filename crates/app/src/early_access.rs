use chrono::Utc;
use dioxus::prelude::*;
use intake::{FormPhase, HttpTransport, SignupSession, SubmitOutcome};
use shared_types::{IntakeConfig, LeadDraft, LeadField, SubmitError, PACKAGE_OPTIONS};
use shared_ui::{Form, FormSelect, Input, SubmitButton, Textarea};

use crate::notify;

pub const THANK_YOU_MESSAGE: &str = "Thank you for your request! We will be in touch soon!";

/// Apply a delivery result to `session`, raising `alert` once on failure.
pub fn settle(
    session: &mut SignupSession,
    result: Result<(), SubmitError>,
    alert: impl FnOnce(&str),
) -> SubmitOutcome {
    let outcome = session.finish_submit(result);
    if let SubmitOutcome::Failed(err) = &outcome {
        alert(err.user_message());
    }
    outcome
}

/// Early-access signup form bound to a [`SignupSession`].
///
/// Expects an [`IntakeConfig`] in context.
#[component]
pub fn EarlyAccessForm() -> Element {
    let config: IntakeConfig = use_context();
    let mut session = use_signal(SignupSession::new);
    let transport = use_hook(HttpTransport::new);

    let handle_change = move |(field, value): (LeadField, String)| {
        session.write().update_field(field, value);
    };

    let handle_submit = move |_: ()| {
        // Guard and phase change happen before the task starts, so a second
        // click in the same frame is already refused.
        let Some(payload) = session.write().begin_submit(Utc::now()) else {
            return;
        };
        let endpoint = config.endpoint_url.clone();
        let transport = transport.clone();

        spawn(async move {
            let result = intake::deliver(&transport, &endpoint, &payload).await;
            settle(&mut session.write(), result, notify::alert);
        });
    };

    let (draft, phase) = {
        let current = session.read();
        (current.draft().clone(), current.phase())
    };

    rsx! {
        EarlyAccessView {
            draft,
            phase,
            on_change: handle_change,
            on_submit: handle_submit,
        }
    }
}

/// Stateless markup for the signup form.
#[component]
pub fn EarlyAccessView(
    draft: LeadDraft,
    phase: FormPhase,
    on_change: EventHandler<(LeadField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    if phase == FormPhase::Submitted {
        return rsx! {
            div { class: "signup-thanks",
                h2 { "{THANK_YOU_MESSAGE}" }
            }
        };
    }

    let bind = move |field: LeadField| move |evt: FormEvent| on_change.call((field, evt.value()));

    rsx! {
        Form { id: "signupForm",
            Input {
                name: LeadField::Name.key().to_string(),
                placeholder: "Full Name *",
                required: true,
                value: draft.name.clone(),
                on_input: bind(LeadField::Name),
            }
            Input {
                name: LeadField::Company.key().to_string(),
                placeholder: "Company *",
                required: true,
                value: draft.company.clone(),
                on_input: bind(LeadField::Company),
            }
            Input {
                name: LeadField::Email.key().to_string(),
                input_type: "email",
                placeholder: "Business Email *",
                required: true,
                value: draft.email.clone(),
                on_input: bind(LeadField::Email),
            }
            Input {
                name: LeadField::Phone.key().to_string(),
                input_type: "tel",
                placeholder: "Phone Number (Optional)",
                value: draft.phone.clone(),
                on_input: bind(LeadField::Phone),
            }
            FormSelect {
                name: LeadField::Package.key().to_string(),
                required: true,
                value: draft.get(LeadField::Package).to_string(),
                options: PACKAGE_OPTIONS,
                onchange: bind(LeadField::Package),
            }
            Textarea {
                name: LeadField::Comments.key().to_string(),
                placeholder: "Comments (Optional)",
                value: draft.comments.clone(),
                on_input: bind(LeadField::Comments),
            }
            SubmitButton {
                label: "Request Early Access",
                busy_label: "Submitting...",
                busy: phase == FormPhase::Submitting,
                disabled: !draft.is_valid(),
                onclick: move |_| on_submit.call(()),
            }
        }
    }
}
