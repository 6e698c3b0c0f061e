use std::collections::BTreeMap;
use std::fmt;

/// A validated field of the task form.
///
/// Ordering follows the form: title, description, deadline.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    Title,
    Description,
    Deadline,
}

impl TaskField {
    pub const ALL: [TaskField; 3] = [TaskField::Title, TaskField::Description, TaskField::Deadline];

    /// Field name as the form knows it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Title => "title",
            TaskField::Description => "description",
            TaskField::Deadline => "deadline",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of a task validation.
///
/// `is_valid` is true exactly when `errors` is empty. Fields without an entry
/// in `errors` passed.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    is_valid: bool,
    errors: BTreeMap<TaskField, String>,
}

impl ValidationResult {
    pub(crate) fn from_errors(errors: BTreeMap<TaskField, String>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// True when no field failed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Messages of the failed fields, in form order.
    pub fn errors(&self) -> &BTreeMap<TaskField, String> {
        &self.errors
    }

    /// Message for `field`, if it failed.
    pub fn error(&self, field: TaskField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Consumes the result, returning the failed fields' messages.
    pub fn into_errors(self) -> BTreeMap<TaskField, String> {
        self.errors
    }
}
