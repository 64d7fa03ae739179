//! Same-origin forwarder for the authentication API.
//!
//! DESIGN
//! ======
//! The browser client posts to relative `/auth/*` paths. In deployments where
//! the auth service lives on another origin, this module relays those requests
//! so cookies set by the auth service land on the app's origin. Only a fixed
//! allow-list of headers crosses in either direction. Upstream redirects are
//! relayed to the browser as-is, never followed here.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use http_body_util::LengthLimitError;

/// Largest request body relayed upstream.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

static REQUEST_HEADERS: [HeaderName; 4] = [header::CONTENT_TYPE, header::ACCEPT, header::COOKIE, header::AUTHORIZATION];
static RESPONSE_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::SET_COOKIE, header::LOCATION];

#[derive(Clone)]
pub struct AuthProxy {
    client: reqwest::Client,
    origin: String,
}

impl AuthProxy {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend init).
    pub fn new(origin: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build()?;
        Ok(Self { client, origin: origin.to_owned() })
    }
}

/// Routes every method under `/auth/` to [`forward`].
///
/// # Errors
///
/// See [`AuthProxy::new`].
pub fn router(origin: &str) -> Result<Router, reqwest::Error> {
    Ok(Router::new()
        .route("/auth/{*path}", any(forward))
        .with_state(AuthProxy::new(origin)?))
}

/// Build the upstream URL for an incoming path (with query).
pub fn upstream_url(origin: &str, path_and_query: &str) -> String {
    format!("{origin}{path_and_query}")
}

/// Copy the allow-listed headers, keeping repeated values.
pub fn filter_headers(headers: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in headers {
        if allowed.contains(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Status for a request body that could not be read: 413 when the size cap
/// was hit, 400 for anything else (client aborts, malformed chunking).
pub fn body_error_status(err: &axum::Error) -> StatusCode {
    let mut cause: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = cause {
        if e.is::<LengthLimitError>() {
            return StatusCode::PAYLOAD_TOO_LARGE;
        }
        cause = e.source();
    }
    StatusCode::BAD_REQUEST
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

async fn forward(State(proxy): State<AuthProxy>, req: Request<Body>) -> Response {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or(parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&proxy.origin, path_and_query);

    let body: Bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let status = body_error_status(&e);
            tracing::warn!(error = %e, %url, status = status.as_u16(), "auth request body rejected");
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                "request body too large"
            } else {
                "invalid request body"
            };
            return error_response(status, message);
        }
    };

    let upstream = proxy
        .client
        .request(parts.method.clone(), &url)
        .headers(filter_headers(&parts.headers, &REQUEST_HEADERS))
        .body(body)
        .send()
        .await;

    let resp = match upstream {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %url, "auth upstream unreachable");
            return error_response(StatusCode::BAD_GATEWAY, "auth service unavailable");
        }
    };

    let status = resp.status();
    let headers = filter_headers(resp.headers(), &RESPONSE_HEADERS);
    match resp.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%url, status = status.as_u16(), "auth request forwarded");
            (status, headers, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, %url, "auth upstream body failed");
            error_response(StatusCode::BAD_GATEWAY, "auth service unavailable")
        }
    }
}
