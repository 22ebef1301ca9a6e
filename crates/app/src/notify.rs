use dioxus::prelude::*;

/// Build the script that raises a native `alert()` with `message`.
///
/// The message is encoded as a JSON string so quotes and newlines survive.
fn alert_script(message: &str) -> String {
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    format!("alert({literal});")
}

/// Show a blocking alert in the page (or desktop webview).
pub fn alert(message: &str) {
    tracing::warn!(message, "Showing failure alert");
    document::eval(&alert_script(message));
}
