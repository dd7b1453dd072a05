//! Summary Card Component
//!
//! One headline number on the dashboard with its icon.

use leptos::prelude::*;

use crate::dashboard::{CardIcon, SummaryCard, CARD_CAPTION};

#[component]
pub fn SummaryCardView(card: SummaryCard) -> impl IntoView {
    view! {
        <div class="summary-card" style=format!("background-color: {}", card.color)>
            <div class="summary-card-top">
                <span class="summary-card-title">{card.title}</span>
                <span class="summary-card-icon">{card_icon(card.icon)}</span>
            </div>
            <div class="summary-card-value">{card.value_text()}</div>
            <div class="summary-card-caption">{CARD_CAPTION}</div>
        </div>
    }
}

/// Lucide-style stroke icons
fn card_icon(icon: CardIcon) -> impl IntoView {
    let paths: &'static [&'static str] = match icon {
        CardIcon::Book => &[
            "M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20",
        ],
        CardIcon::Cross => &["M18 6 6 18", "m6 6 12 12"],
        CardIcon::Loader => &[
            "M21 12a9 9 0 1 1-6.219-8.56",
        ],
        CardIcon::DoubleCheck => &["M18 6 7 17l-5-5", "m22 10-7.5 7.5L13 16"],
    };
    view! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
