//! Session Service
//!
//! Owns the stored auth token and the first-login stamp. Authentication for
//! routing purposes is just "a non-empty token is stored"; there is no expiry
//! check and no server round trip.

use chrono::NaiveDate;

use crate::error::AppResult;
use crate::storage::{KeyValueStore, START_DATE_KEY, TOKEN_KEY};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Routing-level authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    Authenticated,
    #[default]
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

#[derive(Debug, Clone)]
pub struct SessionService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current token, ignoring empty strings
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn state(&self) -> SessionState {
        if self.token().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Store the token after a successful login.
    ///
    /// The start-date stamp is written only if none exists yet.
    pub fn begin(&self, token: &str, today: NaiveDate) -> AppResult<SessionState> {
        self.store.set(TOKEN_KEY, token)?;
        if self.store.get(START_DATE_KEY).is_none() {
            self.store.set(START_DATE_KEY, &today.format(DATE_FORMAT).to_string())?;
            log::info!("[SESSION] First login, start date set to {}", today);
        }
        Ok(self.state())
    }

    /// Forget the token. The start-date stamp survives logout.
    pub fn end(&self) -> AppResult<SessionState> {
        self.store.remove(TOKEN_KEY)?;
        log::info!("[SESSION] Logged out");
        Ok(SessionState::Unauthenticated)
    }

    /// First-login date, if stamped and parseable
    pub fn start_date(&self) -> Option<NaiveDate> {
        let raw = self.store.get(START_DATE_KEY)?;
        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!("[SESSION] Ignoring malformed start date {:?}: {}", raw, e);
                None
            }
        }
    }
}

/// Today's date in UTC, as the browser clock sees it
pub fn today_utc() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_state_follows_token_presence() {
        let store = MemoryStore::new();
        let session = SessionService::new(store.clone());
        assert_eq!(session.state(), SessionState::Unauthenticated);

        store.set(TOKEN_KEY, "").unwrap();
        assert_eq!(session.state(), SessionState::Unauthenticated);

        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(session.state(), SessionState::Authenticated);
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_first_login_stamps_start_date() {
        let store = MemoryStore::new();
        let session = SessionService::new(store.clone());

        let state = session.begin("tok", date(2024, 9, 26)).unwrap();
        assert!(state.is_authenticated());
        assert_eq!(store.get(START_DATE_KEY).as_deref(), Some("2024-09-26"));
        assert_eq!(session.start_date(), Some(date(2024, 9, 26)));
    }

    #[test]
    fn test_second_login_keeps_start_date() {
        let store = MemoryStore::new();
        let session = SessionService::new(store.clone());

        session.begin("tok1", date(2024, 9, 26)).unwrap();
        session.end().unwrap();
        session.begin("tok2", date(2025, 1, 3)).unwrap();

        assert_eq!(store.get(START_DATE_KEY).as_deref(), Some("2024-09-26"));
        assert_eq!(session.token().as_deref(), Some("tok2"));
    }

    #[test]
    fn test_end_removes_token_only() {
        let store = MemoryStore::new();
        let session = SessionService::new(store.clone());
        session.begin("tok", date(2024, 1, 1)).unwrap();

        assert_eq!(session.end().unwrap(), SessionState::Unauthenticated);
        assert_eq!(session.token(), None);
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert!(store.get(START_DATE_KEY).is_some());
    }

    #[test]
    fn test_malformed_start_date_is_ignored() {
        let store = MemoryStore::new();
        store.set(START_DATE_KEY, "yesterday").unwrap();
        let session = SessionService::new(store);
        assert_eq!(session.start_date(), None);
    }
}
