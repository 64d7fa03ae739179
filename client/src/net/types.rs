//! Wire types for the authentication API.
//!
//! DESIGN
//! ======
//! Every `User` field is optional: the UI only needs to know whether a user
//! is present, so unknown or missing fields must not fail deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Message shown when the server does not explain a failed login.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Failed to Login";

/// The signed-in user as returned by `GET /auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Best available label for the user.
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or("rider")
    }
}

/// Error body shape used by the auth API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Pull the server-supplied `error` text out of a failure body.
///
/// Returns `None` for non-JSON bodies, a missing field, or blank text.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
}

/// A failed `POST /auth/login`.
///
/// All variants surface the same way to the user; only a rejection carrying
/// server text changes the message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("login rejected with status {status}: {}", .message.as_deref().unwrap_or(LOGIN_FALLBACK_MESSAGE))]
    Rejected { status: u16, message: Option<String> },
    #[error("login request failed: {0}")]
    Transport(String),
    #[error("login is only available in the browser")]
    Unavailable,
}

impl LoginError {
    /// Build a rejection from a non-2xx status and its raw body.
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, message: parse_error_message(body) }
    }

    /// Text for the error toast.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message: Some(message), .. } => message,
            _ => LOGIN_FALLBACK_MESSAGE,
        }
    }
}
