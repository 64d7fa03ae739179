//! REST API helpers for communicating with the auth server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginError, User};
use crate::state::login::Credentials;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const SESSION_ENDPOINT: &str = "/auth/me";

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> LoginError {
    LoginError::Transport(err.to_string())
}

/// Fetch the currently authenticated user from `/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Submit credentials via `POST /auth/login`.
///
/// Any 2xx answer is success; the body is not read.
///
/// # Errors
///
/// Returns [`LoginError::Rejected`] for non-2xx answers (carrying the body's
/// `error` text when present), [`LoginError::Transport`] when no response
/// arrives, and [`LoginError::Unavailable`] outside the browser.
pub async fn login(credentials: &Credentials) -> Result<(), LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(credentials)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(LoginError::rejected(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(LoginError::Unavailable)
    }
}
