use chrono::NaiveDate;

use crate::tasks::{
    clock::{ISO_DATE_FORMAT, SystemClock},
    result::ValidationResult,
    validator::TaskValidator,
};

/// A task as entered in the form.
///
/// Every field is optional so that a half-filled form can still be validated;
/// missing fields simply fail their check.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    /// Short name shown in the list
    pub title: Option<String>,

    /// Free text describing the work
    pub description: Option<String>,

    /// Due date as `YYYY-MM-DD`
    pub deadline: Option<String>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Sets the deadline from a calendar date, formatted as `YYYY-MM-DD`.
    pub fn deadline_date(mut self, date: NaiveDate) -> Self {
        self.deadline = Some(date.format(ISO_DATE_FORMAT).to_string());
        self
    }

    /// Validates against the default rules and the system clock.
    ///
    /// Use [`TaskValidator`] directly to pin the date or change the rules.
    pub fn validate(&self) -> ValidationResult {
        TaskValidator::<SystemClock>::new().validate(self)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<&serde_json::Value> for Task {
    type Error = crate::tasks::error::TaskError;

    /// Reads a task from an untyped JSON record.
    ///
    /// Fields that are absent, `null` or not strings are left as `None`, so
    /// they fail validation instead of aborting it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidInput`](crate::tasks::error::TaskError::InvalidInput)
    /// if `value` is not a JSON object.
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let object = value.as_object().ok_or_else(|| {
            let found = match value {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                Value::String(_) => "a string",
                Value::Array(_) => "an array",
                Value::Object(_) => "an object",
            };
            crate::tasks::error::TaskError::InvalidInput(format!(
                "expected a task object, found {found}"
            ))
        })?;

        let field = |name: &str| {
            object
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        Ok(Task {
            title: field("title"),
            description: field("description"),
            deadline: field("deadline"),
        })
    }
}
