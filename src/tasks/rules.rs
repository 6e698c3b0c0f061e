/// Minimum title length, in characters.
pub const DEFAULT_TITLE_MIN_LEN: usize = 3;
/// Minimum description length, in characters.
pub const DEFAULT_DESCRIPTION_MIN_LEN: usize = 10;

pub const DEADLINE_MESSAGE: &str = "Deadline must be today or later.";

/// Tunable limits for the task form.
///
/// The defaults are the form's standard rules: a title of at least 3
/// characters and a description of at least 10.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Shortest accepted title, counted in characters
    pub title_min_len: usize,

    /// Shortest accepted description, counted in characters
    pub description_min_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        ValidationRules {
            title_min_len: DEFAULT_TITLE_MIN_LEN,
            description_min_len: DEFAULT_DESCRIPTION_MIN_LEN,
        }
    }
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_min_len(mut self, len: usize) -> Self {
        self.title_min_len = len;
        self
    }

    pub fn description_min_len(mut self, len: usize) -> Self {
        self.description_min_len = len;
        self
    }

    /// Message reported for a title that is missing or too short.
    pub fn title_message(&self) -> String {
        format!("Title must be at least {} characters.", self.title_min_len)
    }

    /// Message reported for a description that is missing or too short.
    pub fn description_message(&self) -> String {
        format!(
            "Description must be at least {} characters.",
            self.description_min_len
        )
    }
}
