//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-in pages apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::routes::LOGIN_ROUTE;
use crate::state::auth::AuthState;

/// Whether a signed-in page should send the visitor to the login route.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
