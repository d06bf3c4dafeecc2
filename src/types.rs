//! Core types for taskdeck.

use serde::{Deserialize, Serialize};

/// A tracked task.
///
/// `completed` is stored as an INTEGER 0/1 in SQLite and always normalized
/// to a boolean here. Timestamps are Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Request body for creating a task.
///
/// `description` is optional at the type level so a missing field produces
/// a structured validation error instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub description: Option<String>,
}

/// Request body for partially updating a task.
///
/// Both fields are optional, but supplying neither is a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// True if the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serializes_completed_as_boolean() {
        let task = Task {
            id: 1,
            description: "buy milk".to_string(),
            completed: false,
            created_at: 1000,
            updated_at: 1000,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["completed"], serde_json::Value::Bool(false));
        assert_eq!(json["id"], 1);
        assert_eq!(json["description"], "buy milk");
    }

    #[test]
    fn patch_with_no_fields_is_empty() {
        let patch: TaskPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_with_completed_only_is_not_empty() {
        let patch: TaskPatch = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.completed, Some(true));
        assert!(patch.description.is_none());
    }
}
