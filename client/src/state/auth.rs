//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the root `App` and provided as `RwSignal<AuthState>`. Route guards
//! and the login page read it; `net::session` is the only writer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the first session fetch has resolved.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Mark a session fetch as in flight. The current user is kept so
    /// identity-dependent chrome does not flicker during a refresh.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply the result of a session fetch.
    pub fn finish_refresh(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Header text for the home page.
    pub fn greeting(&self) -> String {
        match (&self.user, self.loading) {
            (Some(user), _) => format!("Welcome back, {}", user.display_name()),
            (None, true) => "Checking your session...".to_owned(),
            (None, false) => "You are signed out.".to_owned(),
        }
    }
}
