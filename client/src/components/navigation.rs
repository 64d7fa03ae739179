//! Bottom navigation bar shared by the signed-in and informational pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::routes::{FAQ_ROUTE, HOME_ROUTE};

#[derive(Clone, Copy)]
struct NavItem {
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: HOME_ROUTE },
    NavItem { label: "FAQs", href: FAQ_ROUTE },
];

#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    view! {
                        <A href=item.href attr:class="bottom-nav__link">
                            {item.label}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
