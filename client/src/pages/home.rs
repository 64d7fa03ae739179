//! Home page for signed-in riders.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navigation::Navigation;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Home page. Redirects to `/login` once the session has loaded empty.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1 class="home-page__title">"Hop In!"</h1>
                <p class="home-page__greeting">{move || auth.with(AuthState::greeting)}</p>
            </header>
            <Navigation/>
        </div>
    }
}
