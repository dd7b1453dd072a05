//! Nav Link Component
//!
//! Anchor that routes through the navigator instead of reloading the page.

use leptos::prelude::*;

use crate::navigation::use_navigator;
use crate::routes::Route;

#[component]
pub fn NavLink(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let navigator = use_navigator();
    let href = to.path();
    let target = to.clone();
    let is_active = move || navigator.route().get() == to;
    let class_name = move || {
        if is_active() {
            format!("{} active", class).trim().to_string()
        } else {
            class.clone()
        }
    };

    view! {
        <a
            href=href
            class=class_name
            on:click=move |ev| {
                ev.prevent_default();
                navigator.navigate(target.clone());
            }
        >
            {children()}
        </a>
    }
}
