use clap::ValueEnum;
use serde::Serialize;

/// A macro projected to one flat export row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroRow {
    /// Macro title, copied verbatim
    pub title: String,
    /// Last modification timestamp, copied verbatim
    pub updated_at: String,
    /// HTML comment template, plain text after normalization
    pub comment_value_html: Option<String>,
    /// Subject line set by the macro, if any
    pub subject: Option<String>,
}

impl MacroRow {
    pub fn new(title: impl Into<String>, updated_at: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            updated_at: updated_at.into(),
            comment_value_html: None,
            subject: None,
        }
    }
}

/// How to resolve two actions writing the same row column
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MergePolicy {
    /// Keep the first matching action's value
    FirstWins,
    /// Keep the last matching action's value
    LastWins,
    /// Abort the run when a column is set twice
    Reject,
}

impl Default for MergePolicy {
    fn default() -> Self {
        MergePolicy::LastWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_has_no_optional_cells() {
        let row = MacroRow::new("Greeting", "2021-01-01");
        assert_eq!(row.title, "Greeting");
        assert_eq!(row.updated_at, "2021-01-01");
        assert!(row.comment_value_html.is_none());
        assert!(row.subject.is_none());
    }

    #[test]
    fn test_default_merge_policy() {
        assert_eq!(MergePolicy::default(), MergePolicy::LastWins);
    }
}
