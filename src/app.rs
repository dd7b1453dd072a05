//! Job Lander Frontend App
//!
//! Provides the shared services and renders the page for the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Layout, ToastContainer};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::navigation::Navigator;
use crate::pages::{
    DashboardPage, LoginPage, NotFoundPage, ProfilePage, RegisterPage, ResourceDetailPage, ResourceListPage,
    TablePage,
};
use crate::query::{QueryClient, QueryEpochs};
use crate::routes::Route;
use crate::session::SessionState;
use crate::store::{AppState, AppStateStoreFields};
use crate::toast::Toaster;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    let initial = ctx.session().state();
    log::info!("[APP] Starting with session {:?}", initial);

    let store = Store::new(AppState::new(initial));
    let toaster = Toaster::new(ctx.config.toast_ms);
    provide_context(store);
    provide_context(toaster);
    provide_context(QueryClient::new());
    provide_context(QueryEpochs::new());
    provide_context(ctx);

    // settles the initial location through the guard
    let navigator = Navigator::new(store);
    navigator.listen();
    provide_context(navigator);

    // login and logout both land here
    Effect::new(move |previous: Option<SessionState>| {
        let state = store.session().get();
        if previous.is_some_and(|p| p != state) {
            navigator.recheck();
        }
        state
    });

    let route = navigator.route();

    view! {
        {move || match route.get() {
            Route::Login => view! { <LoginPage /> }.into_any(),
            Route::Register => view! { <RegisterPage /> }.into_any(),
            Route::Dashboard => view! { <Layout><DashboardPage /></Layout> }.into_any(),
            Route::Profile => view! { <Layout><ProfilePage /></Layout> }.into_any(),
            Route::Resources(kind) => view! { <Layout><ResourceListPage kind=kind /></Layout> }.into_any(),
            Route::ResourceDetail(kind, id) => {
                view! { <Layout><ResourceDetailPage kind=kind id=id /></Layout> }.into_any()
            }
            Route::Table => view! { <Layout><TablePage /></Layout> }.into_any(),
            Route::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
        }}
        <ToastContainer />
    }
}
