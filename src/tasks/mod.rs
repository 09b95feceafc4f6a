// tasks/mod.rs — Task record shape and field validation.
//
// Everything that writes a task goes through `validate_fields` first, so a
// record violating the title/description bounds is never persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::TaskRow;

/// Maximum title length, in Unicode scalar values.
pub const TITLE_MAX_CHARS: usize = 60;
/// Maximum description length, in Unicode scalar values.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A field-level validation failure. The message is what the client sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide a title for this task")]
    MissingTitle,
    #[error("Title cannot be more than 60 characters")]
    TitleTooLong,
    #[error("Please provide a description for this task")]
    MissingDescription,
    #[error("Description cannot be more than 500 characters")]
    DescriptionTooLong,
}

/// Check the task field invariants, returning the first violated rule.
pub fn validate_fields(title: &str, description: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// Caller-supplied fields for creating a task.
///
/// Missing `title`/`description` deserialize to the empty string so that
/// "field absent" and "field empty" fail validation the same way, with our
/// message rather than a serde one. `completed` defaults to `false` but an
/// explicit value is never overridden.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.title, &self.description)
    }
}

/// Caller-supplied fields for updating a task. Absent fields leave the
/// stored value unchanged; the merged result is re-validated before the write.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// A stored task as served over the REST API (camelCase JSON keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_fields_at_the_length_bounds() {
        let title = "t".repeat(TITLE_MAX_CHARS);
        let description = "d".repeat(DESCRIPTION_MAX_CHARS);
        assert_eq!(validate_fields(&title, &description), Ok(()));
    }

    #[test]
    fn rejects_empty_title() {
        assert_eq!(
            validate_fields("", "something"),
            Err(ValidationError::MissingTitle)
        );
    }

    #[test]
    fn rejects_title_over_bound() {
        let title = "t".repeat(TITLE_MAX_CHARS + 1);
        assert_eq!(
            validate_fields(&title, "something"),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn rejects_empty_description() {
        assert_eq!(
            validate_fields("a title", ""),
            Err(ValidationError::MissingDescription)
        );
    }

    #[test]
    fn rejects_description_over_bound() {
        let description = "d".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(
            validate_fields("a title", &description),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn length_bound_counts_chars_not_bytes() {
        // 60 multibyte characters are within the bound even though the byte
        // length is far larger.
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert_eq!(validate_fields(&title, "something"), Ok(()));
    }

    #[test]
    fn draft_defaults_completed_to_false() {
        let draft: TaskDraft = serde_json::from_str(r#"{"title":"a","description":"b"}"#).unwrap();
        assert!(!draft.completed);
    }

    #[test]
    fn draft_keeps_explicit_completed() {
        let draft: TaskDraft =
            serde_json::from_str(r#"{"title":"a","description":"b","completed":true}"#).unwrap();
        assert!(draft.completed);
    }

    #[test]
    fn draft_missing_fields_fail_validation_not_deserialization() {
        let draft: TaskDraft = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn patch_with_empty_body_changes_nothing() {
        let patch: TaskPatch = serde_json::from_str(r#"{}"#).unwrap();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.completed.is_none());
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingTitle.to_string(),
            "Please provide a title for this task"
        );
        assert_eq!(
            ValidationError::DescriptionTooLong.to_string(),
            "Description cannot be more than 500 characters"
        );
    }
}
