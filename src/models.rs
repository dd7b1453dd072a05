//! Frontend Models
//!
//! Data structures matching the REST API payloads and the local todo list.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

// ========================
// Auth
// ========================

/// Login form payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> AppResult<()> {
        if self.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }
        Ok(())
    }
}

/// Registration form payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> AppResult<()> {
        if self.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }
        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'))
            .unwrap_or(false);
        if !well_formed {
            return Err(AppError::Validation("Invalid email".to_string()));
        }
        if self.password.chars().count() < 8 {
            return Err(AppError::Validation("Password must be at least 8 characters".to_string()));
        }
        Ok(())
    }
}

/// `POST /api/token/login` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub auth_token: Option<String>,
}

/// `GET /api/users/me` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserProfile {
    /// "First Last", falling back to the username
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

// ========================
// Dashboard
// ========================

/// `GET /api/statistics` response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub total_applications: u64,
    pub rejected_applications: u64,
    pub pending_applications: u64,
    pub accepted_applications: u64,
}

/// `GET /api/percents` response
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StagePercents {
    pub applied_stage: f64,
    pub assessment_stage: f64,
    pub interview_stage: f64,
    pub offer_stage: f64,
    pub phonescreen_stage: f64,
}

/// One bucket of `GET /api/timeseries`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesPoint {
    pub date: String,
    #[serde(default, alias = "total_applications")]
    pub applications: f64,
    #[serde(default, alias = "accepted_applications")]
    pub accepted: f64,
    #[serde(default, alias = "pending_applications")]
    pub pending: f64,
    #[serde(default, alias = "rejected_applications")]
    pub rejected: f64,
}

// ========================
// Local
// ========================

/// Dashboard todo entry (stored in localStorage)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub completed: bool,
}
