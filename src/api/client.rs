//! REST Client Core
//!
//! Base URL handling, token header, status mapping and body decoding.

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult, GENERIC_ERROR_MESSAGE};
use crate::session::SessionService;
use crate::storage::{KeyValueStore, LocalStorage};

/// Scheme name the backend expects in front of the raw token
pub const AUTH_SCHEME: &str = "Token";

/// Client for the job tracking backend.
///
/// The token is read from the session on every call, so a login or logout
/// takes effect immediately without rebuilding the client.
#[derive(Debug, Clone)]
pub struct ApiClient<S: KeyValueStore = LocalStorage> {
    http: reqwest::Client,
    base_url: String,
    session: SessionService<S>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, session: SessionService<S>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &SessionService<S> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Token <token>` when a token is stored
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("{} {}", AUTH_SCHEME, token)),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        log::debug!("[API] GET {}", path);
        let builder = self.authorized(self.http.get(self.url(path)));
        decode(send(builder).await?)
    }

    pub(crate) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        log::debug!("[API] GET {} (with query)", path);
        let builder = self.authorized(self.http.get(self.url(path)).query(query));
        decode(send(builder).await?)
    }

    /// POST a JSON body, optionally with the token header.
    /// Returns the raw body text of a 2xx response.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B, authenticated: bool) -> AppResult<String>
    where
        B: Serialize + ?Sized,
    {
        let (status, text) = self.post_raw(path, body, authenticated).await?;
        check_status(status, text)
    }

    /// POST without status mapping; the caller interprets non-2xx bodies
    pub(crate) async fn post_raw<B>(&self, path: &str, body: &B, authenticated: bool) -> AppResult<(u16, String)>
    where
        B: Serialize + ?Sized,
    {
        log::debug!("[API] POST {}", path);
        let mut builder = self.http.post(self.url(path)).json(body);
        if authenticated {
            builder = self.authorized(builder);
        }
        send_raw(builder).await
    }
}

async fn send(builder: RequestBuilder) -> AppResult<String> {
    let (status, body) = send_raw(builder).await?;
    check_status(status, body)
}

async fn send_raw(builder: RequestBuilder) -> AppResult<(u16, String)> {
    let response = builder.send().await.map_err(|e| {
        log::warn!("[API] Request failed: {}", e);
        AppError::from(e)
    })?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(AppError::from)?;
    Ok((status, body))
}

fn check_status(status: u16, body: String) -> AppResult<String> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        log::warn!("[API] Server answered {}", status);
        Err(status_error(status, &body))
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: String) -> AppResult<T> {
    serde_json::from_str(&body).map_err(AppError::from)
}

pub(crate) fn status_error(status: u16, body: &str) -> AppError {
    let message = error_message(body);
    match status {
        401 | 403 => AppError::Authentication(message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())),
        _ => AppError::Status {
            status,
            message: message.unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            }),
        },
    }
}

/// Pull a human readable message out of an error body.
///
/// Precedence: first `non_field_errors` entry, then `detail`, then the first
/// message of any field error (fields in the order sent).
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match &value {
        Value::Object(map) => {
            if let Some(msg) = map.get("non_field_errors").and_then(first_message) {
                return Some(msg);
            }
            if let Some(msg) = map.get("detail").and_then(first_message) {
                return Some(msg);
            }
            map.values().find_map(first_message)
        }
        other => first_message(other),
    }
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}
