use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use intake::SignupSession;
use serde_json::Value;
use shared_types::{LeadDraft, LeadField, ALL_FIELDS};
use std::sync::Arc;
use tokio::sync::Mutex;

/// One request as the fake ingestion endpoint saw it.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct EndpointState {
    reply: StatusCode,
    received: Arc<Mutex<Vec<Received>>>,
}

/// A local stand-in for the form-ingestion endpoint.
pub struct FakeEndpoint {
    pub url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl FakeEndpoint {
    /// Everything posted so far, in arrival order.
    pub async fn received(&self) -> Vec<Received> {
        self.received.lock().await.clone()
    }
}

async fn ingest(
    State(state): State<EndpointState>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_str(&body).unwrap_or(Value::String(body));
    state
        .received
        .lock()
        .await
        .push(Received { content_type, body });
    state.reply
}

/// Start a fake endpoint on an ephemeral port that answers every POST to
/// `/exec` with `reply`.
pub async fn spawn_endpoint(reply: StatusCode) -> FakeEndpoint {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = EndpointState {
        reply,
        received: received.clone(),
    };
    let app = Router::new().route("/exec", post(ingest)).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake endpoint");
    let addr = listener.local_addr().expect("Fake endpoint has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake endpoint crashed");
    });

    FakeEndpoint {
        url: format!("http://{}/exec", addr),
        received,
    }
}

/// A URL on a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}/exec", addr)
}

/// The draft from the early-access scenario: required fields only.
pub fn scenario_draft() -> LeadDraft {
    let mut draft = LeadDraft::new();
    draft.set(LeadField::Name, "A");
    draft.set(LeadField::Company, "B");
    draft.set(LeadField::Email, "a@b.com");
    draft.set(LeadField::Phone, "");
    draft.set(LeadField::Package, "medium");
    draft.set(LeadField::Comments, "");
    draft
}

/// A fresh session filled in field by field from [`scenario_draft`].
pub fn scenario_session() -> SignupSession {
    let draft = scenario_draft();
    let mut session = SignupSession::new();
    for field in ALL_FIELDS {
        session.update_field(*field, draft.get(*field));
    }
    session
}
