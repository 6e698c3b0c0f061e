use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use crate::tasks::error::TaskError;
use crate::tasks::{
    clock::{Clock, SystemClock},
    result::{TaskField, ValidationResult},
    rules::{DEADLINE_MESSAGE, ValidationRules},
    task::Task,
};

/// Checks task form input.
///
/// Every field is checked on every call; one failing field never hides
/// another. Field failures are reported in the returned
/// [`ValidationResult`], never as an `Err`.
#[derive(Debug, Clone, Default)]
pub struct TaskValidator<C = SystemClock> {
    rules: ValidationRules,
    clock: C,
}

impl TaskValidator<SystemClock> {
    /// Validator with the default rules, reading today's date from the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> TaskValidator<C> {
    /// Validator with the default rules and the given source of "today".
    pub fn with_clock(clock: C) -> Self {
        TaskValidator {
            rules: ValidationRules::default(),
            clock,
        }
    }

    /// Replaces the validation rules.
    pub fn rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Rules currently applied.
    pub fn current_rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validates all fields of a task.
    ///
    /// # Arguments
    ///
    /// * `task` - The task to validate.
    ///
    /// # Returns
    ///
    /// A [`ValidationResult`] holding one message per failed field. It is
    /// valid exactly when no field failed.
    ///
    /// # Examples
    /// ```rust
    /// use todo_form::tasks::{
    ///     clock::FixedClock, result::TaskField, task::Task, validator::TaskValidator,
    /// };
    ///
    /// let validator = TaskValidator::with_clock(FixedClock::from_iso("2026-10-19").unwrap());
    ///
    /// let task = Task::new("Buy milk")
    ///     .description("Buy milk from the store")
    ///     .deadline("2026-10-19");
    /// assert!(validator.validate(&task).is_valid());
    ///
    /// let task = Task::new("Buy milk").description("Buy milk from the store");
    /// let result = validator.validate(&task);
    /// assert!(!result.is_valid());
    /// assert!(result.error(TaskField::Deadline).is_some());
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn validate(&self, task: &Task) -> ValidationResult {
        let checks = [
            (TaskField::Title, self.validate_title(task.title.as_deref())),
            (
                TaskField::Description,
                self.validate_description(task.description.as_deref()),
            ),
            (
                TaskField::Deadline,
                self.validate_deadline(task.deadline.as_deref()),
            ),
        ];

        let mut errors = BTreeMap::new();
        for (field, check) in checks {
            if let Err(message) = check {
                #[cfg(feature = "tracing")]
                tracing::debug!(field = %field, message = %message, "Task field failed validation");
                errors.insert(field, message);
            }
        }

        let result = ValidationResult::from_errors(errors);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            is_valid = result.is_valid(),
            failed = result.errors().len(),
            "Task validated"
        );
        result
    }

    /// Validates an untyped JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidInput`] if `value` is not a JSON object.
    /// Any object, even an empty one, yields a verdict.
    ///
    /// # Examples
    /// ```rust
    /// use serde_json::json;
    /// use todo_form::tasks::{clock::FixedClock, validator::TaskValidator};
    ///
    /// let validator = TaskValidator::with_clock(FixedClock::from_iso("2026-10-19").unwrap());
    ///
    /// let result = validator.validate_value(&json!({ "title": "Hi" })).unwrap();
    /// assert_eq!(result.errors().len(), 3);
    ///
    /// assert!(validator.validate_value(&json!(null)).is_err());
    /// ```
    #[cfg(feature = "serde")]
    pub fn validate_value(&self, value: &serde_json::Value) -> Result<ValidationResult, TaskError> {
        let task = Task::try_from(value)?;
        Ok(self.validate(&task))
    }

    /// Validates the title.
    ///
    /// # Errors
    ///
    /// Returns the title message if the title is missing or shorter than the
    /// configured minimum.
    pub fn validate_title(&self, title: Option<&str>) -> Result<(), String> {
        match title {
            Some(title) if has_min_chars(title, self.rules.title_min_len) => Ok(()),
            _ => Err(self.rules.title_message()),
        }
    }

    /// Validates the description.
    ///
    /// # Errors
    ///
    /// Returns the description message if the description is missing or
    /// shorter than the configured minimum.
    pub fn validate_description(&self, description: Option<&str>) -> Result<(), String> {
        match description {
            Some(description) if has_min_chars(description, self.rules.description_min_len) => {
                Ok(())
            }
            _ => Err(self.rules.description_message()),
        }
    }

    /// Validates the deadline against today's date from the clock.
    ///
    /// # Errors
    ///
    /// Returns the deadline message if the deadline is missing, does not start
    /// with a zero-padded `YYYY-MM-DD` date, or is earlier than today. Text
    /// after the date (e.g. a time of day) is ignored.
    ///
    /// # Examples
    /// ```rust
    /// use todo_form::tasks::{clock::FixedClock, validator::TaskValidator};
    ///
    /// let validator = TaskValidator::with_clock(FixedClock::from_iso("2026-10-19").unwrap());
    ///
    /// assert!(validator.validate_deadline(Some("2026-10-19")).is_ok());
    /// assert!(validator.validate_deadline(Some("2026-10-18")).is_err());
    /// assert!(validator.validate_deadline(Some("2026-10-19T08:00")).is_ok());
    /// assert!(validator.validate_deadline(Some("2026-1-5")).is_err());
    /// assert!(validator.validate_deadline(None).is_err());
    /// ```
    pub fn validate_deadline(&self, deadline: Option<&str>) -> Result<(), String> {
        // Fixed-width zero-padded dates order the same as strings and as dates
        match deadline.and_then(iso_date_prefix) {
            Some(date) if date >= self.clock.today_iso().as_str() => Ok(()),
            _ => Err(DEADLINE_MESSAGE.to_string()),
        }
    }
}

/// Length is counted in UTF-16 code units, the unit browser form fields report.
fn has_min_chars(value: &str, min: usize) -> bool {
    !value.is_empty() && value.encode_utf16().count() >= min
}

/// Leading `YYYY-MM-DD` of `value`, if it has that shape.
fn iso_date_prefix(value: &str) -> Option<&str> {
    let date = value.get(..10)?;
    date.bytes()
        .enumerate()
        .all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
        .then_some(date)
}
