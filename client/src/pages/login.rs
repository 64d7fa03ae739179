//! Login page: email + password against `POST /auth/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::login_flow::{HttpAuthApi, LoginFlow, RouterNavigator, guard_entry};
use crate::state::auth::AuthState;
use crate::state::login::{LoginEntry, LoginForm};
use crate::state::toast::ToastState;

/// Login route. Shows a placeholder while the session loads, sends signed-in
/// users home, and mounts the form otherwise.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigator = RouterNavigator::new(use_navigate());

    Effect::new(move || {
        guard_entry(&auth, &navigator);
    });

    view! {
        <div class="login-page">
            {move || match auth.with(LoginEntry::from_auth) {
                LoginEntry::Loading => view! { <div class="login-page__loading">"Loading..."</div> }.into_any(),
                LoginEntry::Redirect => ().into_any(),
                LoginEntry::Form => view! { <LoginPanel/> }.into_any(),
            }}
        </div>
    }
}

/// The interactive form. Only mounted once the entry guard allows it.
#[component]
fn LoginPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(LoginForm::default());
    let flow = LoginFlow::new(HttpAuthApi, auth, RouterNavigator::new(use_navigate()), toasts, form);

    let on_submit = {
        let flow = flow.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let credentials = form.with_untracked(LoginForm::credentials);

            #[cfg(feature = "hydrate")]
            {
                let flow = flow.clone();
                leptos::task::spawn_local(async move {
                    flow.submit(credentials).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&flow, credentials);
            }
        }
    };

    let on_signup = {
        let flow = flow.clone();
        move |_| {
            flow.navigate_to_signup();
        }
    };

    let on_forgot_password = move |_| flow.navigate_to_forgot_password();

    view! {
        <div class="login-card">
            <div class="login-card__title">
                <h2>"Hop In!"</h2>
                <h2>"Smarter Rides Start Here."</h2>
            </div>
            <form class="login-form" on:submit=on_submit>
                <input
                    class="login-input"
                    type="email"
                    placeholder="Email"
                    autocomplete="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <div class="login-password">
                    <input
                        class="login-input"
                        type=move || form.with(LoginForm::password_input_type)
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="login-password__toggle"
                        aria-label=move || form.with(LoginForm::visibility_toggle_label)
                        on:click=move |_| form.update(LoginForm::toggle_password_visibility)
                    >
                        {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                    </button>
                </div>
                <div class="login-links">
                    <button
                        type="button"
                        class="login-link"
                        disabled=move || !form.with(LoginForm::signup_enabled)
                        on:click=on_signup
                    >
                        "Sign Up"
                    </button>
                    <button
                        type="button"
                        class="login-link"
                        disabled=move || !form.with(LoginForm::forgot_password_enabled)
                        on:click=on_forgot_password
                    >
                        "Forgot Password?"
                    </button>
                </div>
                <button
                    type="submit"
                    class="login-button"
                    disabled=move || !form.with(LoginForm::submit_enabled)
                >
                    "Start Sharing!"
                </button>
            </form>
        </div>
    }
}
