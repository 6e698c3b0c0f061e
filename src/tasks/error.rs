use thiserror::Error;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    /// Input is not a task-like record at all (e.g. `null` instead of an object)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A date string is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
