//! 404 Page
//!
//! Shown for unknown paths, then sends the user home after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::navigation::use_navigator;
use crate::routes::Route;

/// Where the delayed redirect goes, if the 404 is still on screen
fn delayed_redirect(shown: &Route, current: &Route) -> Option<Route> {
    (shown == current).then_some(Route::Login)
}

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let delay_ms = use_app_context().config.not_found_redirect_ms;
    let navigator = use_navigator();
    let here = Route::NotFound(path);

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        // the user may have navigated elsewhere meanwhile
        if let Some(target) = delayed_redirect(&here, &navigator.route().get_untracked()) {
            navigator.navigate(target);
        }
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Sorry, the page was not found! redirecting to home page..."</p>
        </div>
    }
}
