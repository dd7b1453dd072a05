//! Entity Endpoints
//!
//! Read access to applications, companies, employees and questions. The
//! backend owns their schema, so records stay as JSON objects and the helpers
//! below turn them into display rows.

use serde_json::Value;

use crate::error::AppResult;
use crate::storage::KeyValueStore;

use super::client::ApiClient;

/// Entity collections exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Applications,
    Companies,
    Employees,
    Questions,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Applications,
        ResourceKind::Companies,
        ResourceKind::Employees,
        ResourceKind::Questions,
    ];

    /// Path segment used by both the API and client routes
    pub fn segment(&self) -> &'static str {
        match self {
            ResourceKind::Applications => "applications",
            ResourceKind::Companies => "companies",
            ResourceKind::Employees => "employees",
            ResourceKind::Questions => "questions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Applications => "Applications",
            ResourceKind::Companies => "Companies",
            ResourceKind::Employees => "Employees",
            ResourceKind::Questions => "Questions",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Applications => "Application",
            ResourceKind::Companies => "Company",
            ResourceKind::Employees => "Employee",
            ResourceKind::Questions => "Question",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.segment() == segment)
    }

    pub fn collection_path(&self) -> String {
        format!("/api/{}/", self.segment())
    }

    pub fn item_path(&self, id: u64) -> String {
        format!("/api/{}/{}/", self.segment(), id)
    }
}

impl<S: KeyValueStore> ApiClient<S> {
    pub async fn list_resource(&self, kind: ResourceKind) -> AppResult<Vec<Value>> {
        let body: Value = self.get_json(&kind.collection_path()).await?;
        Ok(records_from_value(body))
    }

    pub async fn get_resource(&self, kind: ResourceKind, id: u64) -> AppResult<Value> {
        self.get_json(&kind.item_path(id)).await
    }
}

/// Accept either a bare array or a paginated `{ "results": [...] }` page
pub fn records_from_value(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Text for one cell. Nested objects show their name when they have one.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => (if *b { "Yes" } else { "No" }).to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => ["name", "title", "username"]
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
    }
}

/// Record id, if the record carries a numeric `id`
pub fn record_id(record: &Value) -> Option<u64> {
    record.get("id").and_then(Value::as_u64)
}

/// Heading for a record in lists and detail views
pub fn record_title(record: &Value) -> String {
    const TITLE_KEYS: [&str; 6] = ["name", "title", "question", "position", "role", "username"];
    TITLE_KEYS
        .iter()
        .find_map(|k| record.get(*k).and_then(Value::as_str).filter(|s| !s.is_empty()))
        .map(str::to_string)
        .or_else(|| record_id(record).map(|id| format!("#{}", id)))
        .unwrap_or_default()
}

/// `(label, text)` rows for a detail view, `id` excluded
pub fn record_fields(record: &Value) -> Vec<(String, String)> {
    match record {
        Value::Object(map) => map
            .iter()
            .filter(|(key, _)| key.as_str() != "id")
            .map(|(key, value)| (field_label(key), display_value(value)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Union of record keys, first-seen order, `id` first when present
pub fn table_columns(records: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        if let Value::Object(map) = record {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    if let Some(pos) = columns.iter().position(|c| c == "id") {
        let id = columns.remove(pos);
        columns.insert(0, id);
    }
    columns
}

/// `phone_screen_date` -> `Phone screen date`
pub fn field_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
