//! Login form state and the pre-render entry decision.
//!
//! DESIGN
//! ======
//! The form is a plain struct held in a page-local `RwSignal`. Button
//! enablement is derived from `phase` so the view and the flow agree on
//! which actions are live while a request is in flight.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::fmt;

use serde::Serialize;

use super::auth::AuthState;

/// Submission phase. Success leaves the page, failure returns to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
}

/// Email/password pair sent as the `POST /auth/login` body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Local state of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub phase: LoginPhase,
}

impl LoginForm {
    /// Snapshot of the entered credentials. No format checks: the auth API
    /// is the only validator.
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    pub fn visibility_toggle_label(&self) -> &'static str {
        if self.show_password { "Hide password" } else { "Show password" }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    pub fn signup_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// Forgot-password stays clickable during submission, unlike signup.
    pub fn forgot_password_enabled(&self) -> bool {
        true
    }
}

/// What the login route shows for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginEntry {
    /// Session status unknown: render a placeholder and do nothing else.
    Loading,
    /// Already signed in: leave for the home route without mounting the form.
    Redirect,
    Form,
}

impl LoginEntry {
    pub fn from_flags(loading: bool, signed_in: bool) -> Self {
        if loading {
            Self::Loading
        } else if signed_in {
            Self::Redirect
        } else {
            Self::Form
        }
    }

    pub fn from_auth(auth: &AuthState) -> Self {
        Self::from_flags(auth.loading, auth.is_signed_in())
    }
}
