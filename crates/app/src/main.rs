use dioxus::prelude::*;

mod early_access;
pub mod notify;

use early_access::EarlyAccessForm;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Resolve the endpoint once and share it with the form.
    use_context_provider(|| {
        tracing::info!(platform = client_platform(), "Starting signup form");
        intake::config::load_config().clone()
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "signup-page",
            EarlyAccessForm {}
        }
    }
}
