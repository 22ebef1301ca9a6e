use shared_types::{LeadPayload, SubmitError};
use std::future::Future;

/// What the client could observe about a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Cross-origin `no-cors` response: no status, no body.
    Opaque,
    /// A readable HTTP status.
    Status(u16),
}

/// Map what a response exposes onto a [`Delivery`].
///
/// Browsers report `no-cors` responses as type `opaque` with status 0.
pub fn classify_response(opaque: bool, status: u16) -> Delivery {
    if opaque || status == 0 {
        Delivery::Opaque
    } else {
        Delivery::Status(status)
    }
}

/// Sends a JSON body to the ingestion endpoint.
pub trait LeadTransport {
    fn post_json(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<Delivery, SubmitError>>;
}

/// HTTP transport. Native builds post with `reqwest`; in the browser the
/// request goes through `window.fetch` in `no-cors` mode.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LeadTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<Delivery, SubmitError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::transport(format!("Ingestion request failed: {}", e)))?;

        Ok(classify_response(false, response.status().as_u16()))
    }
}

#[cfg(target_arch = "wasm32")]
impl LeadTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<Delivery, SubmitError> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response, ResponseType};

        fn js_error(e: JsValue) -> SubmitError {
            SubmitError::transport(format!("Ingestion request failed: {:?}", e))
        }

        let window = web_sys::window().ok_or_else(|| SubmitError::transport("No window object"))?;

        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::NoCors);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        Ok(classify_response(
            response.type_() == ResponseType::Opaque,
            response.status(),
        ))
    }
}

/// Decide whether a delivery counts as an accepted submission.
///
/// Opaque and zero-status responses are success: in `no-cors` mode that is
/// all the browser ever reports. Readable statuses succeed unless they are
/// client or server errors.
pub fn interpret(delivery: Delivery) -> Result<(), SubmitError> {
    match delivery {
        Delivery::Opaque | Delivery::Status(0) => Ok(()),
        Delivery::Status(status) if status < 400 => Ok(()),
        Delivery::Status(status) => Err(SubmitError::rejected(status)),
    }
}

/// Serialize `payload`, post it to `endpoint`, and interpret the result.
#[tracing::instrument(skip(transport, payload), fields(package = %payload.package))]
pub async fn deliver<T: LeadTransport>(
    transport: &T,
    endpoint: &str,
    payload: &LeadPayload,
) -> Result<(), SubmitError> {
    let body = serde_json::to_string(payload)?;
    let delivery = transport.post_json(endpoint, body).await?;
    interpret(delivery)?;
    tracing::info!(?delivery, "Signup request accepted");
    Ok(())
}
