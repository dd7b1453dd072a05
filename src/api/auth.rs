//! Auth Endpoints
//!
//! Token login/logout, registration and the current user profile.

use crate::error::{AppError, AppResult, GENERIC_ERROR_MESSAGE};
use crate::models::{LoginForm, LoginResponse, RegisterForm, UserProfile};
use crate::storage::KeyValueStore;

use super::client::{decode, error_message, ApiClient};

impl<S: KeyValueStore> ApiClient<S> {
    /// Exchange credentials for a token.
    ///
    /// Every rejection is an authentication failure carrying the server's
    /// message when it sent one.
    pub async fn login(&self, form: &LoginForm) -> AppResult<String> {
        let (status, body) = self.post_raw("/api/token/login", form, false).await?;
        if !(200..300).contains(&status) {
            log::info!("[API] Login rejected with status {}", status);
            let message = error_message(&body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            return Err(AppError::Authentication(message));
        }
        let response: LoginResponse = decode(body)?;
        response
            .auth_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Authentication(GENERIC_ERROR_MESSAGE.to_string()))
    }

    /// Invalidate the token server side
    pub async fn logout(&self) -> AppResult<()> {
        self.post_json("/api/token/logout", &serde_json::json!({}), true)
            .await
            .map(|_| ())
    }

    pub async fn register(&self, form: &RegisterForm) -> AppResult<()> {
        self.post_json("/api/users/", form, false).await.map(|_| ())
    }

    pub async fn current_user(&self) -> AppResult<UserProfile> {
        self.get_json("/api/users/me").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionService;
    use crate::storage::{MemoryStore, TOKEN_KEY};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, store: MemoryStore) -> ApiClient<MemoryStore> {
        ApiClient::new(server.uri(), SessionService::new(store))
    }

    fn creds(username: &str, password: &str) -> LoginForm {
        LoginForm { username: username.into(), password: password.into() }
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/login"))
            .and(body_json(json!({"username": "ada", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"auth_token": "t0k"})))
            .expect(1)
            .mount(&server)
            .await;

        let api = client(&server, MemoryStore::new());
        assert_eq!(api.login(&creds("ada", "secret")).await.unwrap(), "t0k");
    }

    #[tokio::test]
    async fn test_login_rejection_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"non_field_errors": ["Unable to log in."]})),
            )
            .mount(&server)
            .await;

        let api = client(&server, MemoryStore::new());
        let err = api.login(&creds("x", "y")).await.unwrap_err();
        assert_eq!(err, AppError::Authentication("Unable to log in.".into()));
        assert_eq!(err.user_message(), "Unable to log in.");
    }

    #[tokio::test]
    async fn test_login_rejection_without_body_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = client(&server, MemoryStore::new());
        let err = api.login(&creds("x", "y")).await.unwrap_err();
        assert_eq!(err, AppError::Authentication(GENERIC_ERROR_MESSAGE.into()));
    }

    #[tokio::test]
    async fn test_login_without_token_field_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let api = client(&server, MemoryStore::new());
        assert!(matches!(
            api.login(&creds("x", "y")).await,
            Err(AppError::Authentication(_))
        ));
    }

    #[tokio::test]
    async fn test_current_user_is_authenticated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .and(header("Authorization", "Token t0k"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 7, "username": "ada", "email": "ada@example.com"})),
            )
            .mount(&server)
            .await;

        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "t0k").unwrap();
        let user = client(&server, store).current_user().await.unwrap();
        assert_eq!(user.username, "ada");
        assert_eq!(user.id, Some(7));
    }

    #[tokio::test]
    async fn test_register_field_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"username": ["A user with that username already exists."]})),
            )
            .mount(&server)
            .await;

        let form = RegisterForm {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "long enough".into(),
        };
        let err = client(&server, MemoryStore::new()).register(&form).await.unwrap_err();
        assert_eq!(
            err,
            AppError::Status {
                status: 400,
                message: "A user with that username already exists.".into()
            }
        );
    }
}
