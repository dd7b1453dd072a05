//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::UserProfile;
use crate::session::SessionState;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirrors token presence in localStorage
    pub session: SessionState,
    /// Profile loaded at login; `None` until fetched or after logout
    pub user: Option<UserProfile>,
}

impl AppState {
    pub fn new(session: SessionState) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a successful login
pub fn store_sign_in(store: &AppStore, session: SessionState, user: Option<UserProfile>) {
    *store.user().write() = user;
    *store.session().write() = session;
}

/// Record a logout
pub fn store_sign_out(store: &AppStore) {
    *store.user().write() = None;
    *store.session().write() = SessionState::Unauthenticated;
}
