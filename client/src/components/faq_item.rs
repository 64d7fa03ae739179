//! One question/answer row of the FAQ accordion.

use leptos::prelude::*;

use crate::state::faq::{FaqEntry, FaqState, expansion_marker};

/// Clickable question header with a collapsible answer panel.
///
/// Expansion is owned by the page's `FaqState`; clicking toggles this row's
/// index, which collapses whichever row was open before.
#[component]
pub fn FaqItem(index: usize, entry: &'static FaqEntry, faq: RwSignal<FaqState>) -> impl IntoView {
    let expanded = move || faq.with(|s| s.is_expanded(index));

    view! {
        <div class="faq-item">
            <button
                type="button"
                class="faq-item__question"
                aria-expanded=move || expanded().to_string()
                on:click=move |_| faq.update(|s| s.toggle(index))
            >
                <h3 class="faq-item__title">{entry.question}</h3>
                <span class="faq-item__marker">{move || expansion_marker(expanded())}</span>
            </button>
            <div class=move || {
                if expanded() { "faq-item__answer faq-item__answer--open" } else { "faq-item__answer" }
            }>
                <p>{entry.answer}</p>
            </div>
        </div>
    }
}
