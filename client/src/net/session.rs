//! Keeps the shared `AuthState` signal in sync with `/auth/me`.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Re-fetch the session and write the result into `auth`.
///
/// Fire-and-forget: marks the state as loading immediately and applies the
/// fetched user when the request lands. Outside the browser the state stays
/// loading, which keeps server-rendered pages on their placeholders.
pub fn spawn_refresh(auth: RwSignal<AuthState>) {
    auth.update(AuthState::begin_refresh);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = super::api::fetch_current_user().await;
        if user.is_none() {
            leptos::logging::log!("no active session");
        }
        auth.try_update(|state| state.finish_refresh(user));
    });
}
