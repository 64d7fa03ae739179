//! FAQ page rendered as a single-open accordion.

use leptos::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::navigation::Navigation;
use crate::state::faq::{FAQ_ENTRIES, FaqState};

#[component]
pub fn FaqPage() -> impl IntoView {
    let faq = RwSignal::new(FaqState::default());

    view! {
        <div class="faq-page">
            <header class="faq-page__header">
                <h1 class="faq-page__title">"FAQs"</h1>
                <p class="faq-page__subtitle">"Clear your doubts instantly"</p>
            </header>
            <section class="faq-page__list">
                {FAQ_ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <FaqItem index=index entry=entry faq=faq/> })
                    .collect_view()}
            </section>
            <Navigation/>
        </div>
    }
}
