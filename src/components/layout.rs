//! Layout Component
//!
//! Side navigation plus the routed page. Used by every signed-in page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ResourceKind;
use crate::auth::sign_out;
use crate::context::use_app_context;
use crate::query::QueryClient;
use crate::routes::Route;
use crate::store::{store_sign_out, use_app_store, AppStateStoreFields};

use super::NavLink;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <SideNav />
            <main class="main-content">{children()}</main>
        </div>
    }
}

#[component]
fn SideNav() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let queries = expect_context::<QueryClient>();
    let (signing_out, set_signing_out) = signal(false);

    let logout = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        set_signing_out.set(true);
        let api = ctx.api.clone();
        let queries = queries.clone();
        spawn_local(async move {
            if let Err(e) = sign_out(&api, &queries).await {
                log::error!("[SESSION] Could not clear local session: {}", e);
            }
            // the session effect in App moves us back to the login page
            store_sign_out(&store);
            let _ = set_signing_out.try_set(false);
        });
    };

    let user_name = move || {
        store
            .user()
            .get()
            .map(|u| u.display_name())
            .unwrap_or_default()
    };

    view! {
        <nav class="side-nav">
            <div class="side-nav-header">
                <span class="brand">"Job Lander"</span>
                <span class="side-nav-user">{user_name}</span>
            </div>
            <NavLink to=Route::Dashboard class="nav-item">"Dashboard"</NavLink>
            {ResourceKind::ALL
                .into_iter()
                .map(|kind| view! {
                    <NavLink to=Route::Resources(kind) class="nav-item">{kind.title()}</NavLink>
                })
                .collect_view()}
            <NavLink to=Route::Table class="nav-item">"Table"</NavLink>
            <NavLink to=Route::Profile class="nav-item">"Profile"</NavLink>
            <button
                class="nav-item logout-btn"
                prop:disabled=move || signing_out.get()
                on:click=logout
            >
                "Logout"
            </button>
        </nav>
    }
}
