//! Wire types shared between the Todo REST API and its clients.
//!
//! Field names are camelCase on the wire. Timestamps travel as RFC 3339
//! strings; parsing them into real time values is the backend's job.

use serde::{Deserialize, Serialize};

/// A todo item as returned by every successful read or write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned identifier, always positive
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    /// Creation time in UTC (RFC 3339, microsecond precision)
    pub created_at: String,
}

/// Body of `POST /todos`.
///
/// `title` is optional at the type level so that a missing field can be
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /todos/{id}`. Replaces every mutable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Error body for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_serializes_camel_case() {
        let todo = Todo {
            id: 7,
            title: "Buy milk".to_string(),
            description: None,
            is_completed: false,
            created_at: "2026-10-16T09:30:00.123456Z".to_string(),
        };

        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "Buy milk",
                "description": null,
                "isCompleted": false,
                "createdAt": "2026-10-16T09:30:00.123456Z"
            })
        );
    }

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let request: CreateTodoRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.title, None);
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_update_request_defaults_is_completed_to_false() {
        let request: UpdateTodoRequest =
            serde_json::from_value(json!({ "title": "Buy milk", "description": "2%" })).unwrap();
        assert_eq!(request.title.as_deref(), Some("Buy milk"));
        assert_eq!(request.description.as_deref(), Some("2%"));
        assert!(!request.is_completed);
    }
}
