use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// A stored todo item
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A todo that has not been assigned an ID yet.
/// New todos always start out incomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The fields an update replaces wholesale
#[derive(Debug, Clone, PartialEq)]
pub struct TodoChanges {
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TodoValidationError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Invalid todo ID")]
    InvalidId,
}

/// Current time at the precision todos are stored with.
pub fn now_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Render a timestamp the way it is stored and sent over the wire.
/// Fixed width, so lexical order matches chronological order.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

/// Todo IDs are assigned by storage and always positive.
pub fn validate_id(id: i64) -> Result<i64, TodoValidationError> {
    if id <= 0 {
        return Err(TodoValidationError::InvalidId);
    }
    Ok(id)
}

pub fn validate_title(title: Option<String>) -> Result<String, TodoValidationError> {
    let title = title.ok_or(TodoValidationError::MissingTitle)?;
    if title.trim().is_empty() {
        return Err(TodoValidationError::EmptyTitle);
    }
    Ok(title)
}
