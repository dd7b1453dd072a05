//! Navigation
//!
//! History-API router. Every transition goes through the session guard:
//! link clicks, back/forward, first load and session changes.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::routes::{resolve, Route};
use crate::session::SessionState;
use crate::store::{AppStateStoreFields, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// Outcome of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub target: Route,
    /// `None` when the address bar already shows the target
    pub history: Option<HistoryMode>,
}

/// Decide where a request lands and how the address bar changes
pub fn plan(state: SessionState, current: &Route, requested: Route, mode: HistoryMode) -> Transition {
    let target = resolve(state, requested);
    let history = match mode {
        HistoryMode::Push if &target == current => None,
        mode => Some(mode),
    };
    Transition { target, history }
}

#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
    store: AppStore,
}

impl Navigator {
    /// Read the current location and settle it through the guard
    pub fn new(store: AppStore) -> Self {
        let initial = Route::parse(&location_path());
        let navigator = Self {
            route: RwSignal::new(initial.clone()),
            store,
        };
        navigator.go(initial, HistoryMode::Replace);
        navigator
    }

    pub fn route(&self) -> ReadSignal<Route> {
        self.route.read_only()
    }

    pub fn navigate(&self, to: Route) {
        self.go(to, HistoryMode::Push);
    }

    /// Re-run the guard on the current route (after login/logout)
    pub fn recheck(&self) {
        self.go(self.route.get_untracked(), HistoryMode::Replace);
    }

    /// Follow browser back/forward
    pub fn listen(&self) {
        let navigator = *self;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            navigator.go(Route::parse(&location_path()), HistoryMode::Replace);
        });
    }

    fn go(&self, requested: Route, mode: HistoryMode) {
        let state = self.store.session().get_untracked();
        let current = self.route.get_untracked();
        let requested_path = requested.path();
        let transition = plan(state, &current, requested, mode);

        if transition.target.path() != requested_path {
            log::info!("[NAV] {} redirected to {}", requested_path, transition.target.path());
        } else {
            log::debug!("[NAV] {}", requested_path);
        }
        if let Some(mode) = transition.history {
            write_history(&transition.target.path(), mode);
        }
        if transition.target != current {
            self.route.set(transition.target);
        }
    }
}

fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
    };
    if let Err(e) = result {
        log::warn!("[NAV] history update for {} failed: {:?}", path, e);
    }
}

/// Navigator from context
pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResourceKind;

    #[test]
    fn test_push_to_current_route_skips_history() {
        let t = plan(
            SessionState::Authenticated,
            &Route::Dashboard,
            Route::Dashboard,
            HistoryMode::Push,
        );
        assert_eq!(t, Transition { target: Route::Dashboard, history: None });
    }

    #[test]
    fn test_signed_out_push_lands_on_login() {
        let t = plan(
            SessionState::Unauthenticated,
            &Route::Register,
            Route::Resources(ResourceKind::Companies),
            HistoryMode::Push,
        );
        assert_eq!(t.target, Route::Login);
        assert_eq!(t.history, Some(HistoryMode::Push));
    }

    #[test]
    fn test_login_success_recheck_moves_to_dashboard() {
        let t = plan(
            SessionState::Authenticated,
            &Route::Login,
            Route::Login,
            HistoryMode::Replace,
        );
        assert_eq!(t.target, Route::Dashboard);
        assert_eq!(t.history, Some(HistoryMode::Replace));
    }

    #[test]
    fn test_logout_recheck_leaves_protected_page() {
        let t = plan(
            SessionState::Unauthenticated,
            &Route::Profile,
            Route::Profile,
            HistoryMode::Replace,
        );
        assert_eq!(t.target, Route::Login);
    }
}
