//! Sign-in / Sign-out
//!
//! Session lifecycle on top of the API client: the only places a token is
//! created or destroyed.

use chrono::NaiveDate;

use crate::api::ApiClient;
use crate::error::AppResult;
use crate::models::{LoginForm, UserProfile};
use crate::query::QueryClient;
use crate::session::SessionState;
use crate::storage::KeyValueStore;

/// Result of a successful login
#[derive(Debug, Clone, PartialEq)]
pub struct SignIn {
    pub state: SessionState,
    /// Missing if the profile request failed after the token was issued
    pub user: Option<UserProfile>,
}

/// Validate, exchange credentials, store the token, then load the profile.
///
/// Nothing is stored unless the server issued a token.
pub async fn sign_in<S: KeyValueStore>(
    api: &ApiClient<S>,
    form: &LoginForm,
    today: NaiveDate,
) -> AppResult<SignIn> {
    form.validate()?;
    let token = api.login(form).await?;
    let state = api.session().begin(&token, today)?;
    log::info!("[SESSION] Signed in as {}", form.username);

    let user = match api.current_user().await {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("[SESSION] Profile unavailable after login: {}", e);
            None
        }
    };
    Ok(SignIn { state, user })
}

/// Revoke the token server side (best effort), then forget it locally and
/// drop every cached query.
pub async fn sign_out<S: KeyValueStore>(api: &ApiClient<S>, queries: &QueryClient) -> AppResult<SessionState> {
    if let Err(e) = api.logout().await {
        log::warn!("[SESSION] Server logout failed, clearing local session anyway: {}", e);
    }
    queries.clear();
    api.session().end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::query::QueryKey;
    use crate::session::SessionService;
    use crate::storage::{MemoryStore, START_DATE_KEY, TOKEN_KEY};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 26).unwrap()
    }

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm { username: username.into(), password: password.into() }
    }

    async fn mount_login_ok(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/token/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"auth_token": "t0k"})))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_valid_login_stores_token_and_profile() {
        let server = MockServer::start().await;
        mount_login_ok(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .and(header("Authorization", "Token t0k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "ada"})))
            .expect(1)
            .mount(&server)
            .await;

        let store = MemoryStore::new();
        let api = ApiClient::new(server.uri(), SessionService::new(store.clone()));
        let signed_in = sign_in(&api, &form("ada", "secret"), today()).await.unwrap();

        assert_eq!(signed_in.state, SessionState::Authenticated);
        assert_eq!(signed_in.user.map(|u| u.username).as_deref(), Some("ada"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t0k"));
        assert_eq!(store.get(START_DATE_KEY).as_deref(), Some("2024-09-26"));
    }

    #[tokio::test]
    async fn test_profile_failure_keeps_session() {
        let server = MockServer::start().await;
        mount_login_ok(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), SessionService::new(MemoryStore::new()));
        let signed_in = sign_in(&api, &form("ada", "secret"), today()).await.unwrap();
        assert_eq!(signed_in.state, SessionState::Authenticated);
        assert_eq!(signed_in.user, None);
    }

    #[tokio::test]
    async fn test_rejected_login_stores_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"non_field_errors": ["Unable to log in."]})),
            )
            .mount(&server)
            .await;

        let store = MemoryStore::new();
        let api = ApiClient::new(server.uri(), SessionService::new(store.clone()));
        let err = sign_in(&api, &form("x", "y"), today()).await.unwrap_err();

        assert_eq!(err.user_message(), "Unable to log in.");
        assert_eq!(api.session().state(), SessionState::Unauthenticated);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(START_DATE_KEY), None);
    }

    #[tokio::test]
    async fn test_invalid_form_never_hits_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri(), SessionService::new(MemoryStore::new()));
        let err = sign_in(&api, &form("", "y"), today()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_sign_out_clears_session_even_if_server_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/logout"))
            .and(header("Authorization", "Token t0k"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "t0k").unwrap();
        let api = ApiClient::new(server.uri(), SessionService::new(store.clone()));
        let queries = QueryClient::new();
        queries
            .fetch(&QueryKey::STATISTICS, || async { Ok::<_, AppError>(1u32) })
            .await
            .unwrap();

        let state = sign_out(&api, &queries).await.unwrap();
        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert!(!queries.is_cached(&QueryKey::STATISTICS));
    }
}
