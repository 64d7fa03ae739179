//! Toast host and the helper that queues notifications.
//!
//! Toasts are dismissed on click or after `TOAST_TTL_MS`. The timer only
//! runs in the browser; server renders never hold toasts.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

/// Queue a toast and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let Some(id) = toasts.try_update(|s| s.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-position stack of active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|s| s.items.clone())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() on:click=move |_| toasts.update(|s| s.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
