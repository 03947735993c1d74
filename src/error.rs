use crate::assignment::Category;
use std::fmt;
use thiserror::Error;

/// Numeric input fields of an assignment entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Score,
    Weight,
}

impl NumericField {
    fn range_message(&self) -> &'static str {
        match self {
            NumericField::Score => "Grade must be between 0 and 100.",
            NumericField::Weight => "Weight must be a positive number.",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Score => f.write_str("score"),
            NumericField::Weight => f.write_str("weight"),
        }
    }
}

/// Rejections raised while collecting or committing an entry.
///
/// The `Display` output is the message shown to the user before re-prompting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    #[error("Assignment name cannot be empty.")]
    EmptyName,

    #[error("Invalid category. Enter FA or SA.")]
    InvalidCategory(String),

    #[error("Please enter a valid number.")]
    NotANumber { field: NumericField },

    #[error("{}", .field.range_message())]
    OutOfRange { field: NumericField },

    #[error(
        "Cannot add weight: that would exceed {category} limit of {quota}.\nRemaining {category} quota: {remaining:.2}. Try a smaller weight."
    )]
    QuotaExceeded {
        category: Category,
        quota: f64,
        remaining: f64,
    },

    #[error("session is finalized; no more entries can be added")]
    SessionFinalized,
}

impl EntryError {
    /// Quota rejections abandon the whole pending entry rather than one field.
    pub fn abandons_entry(&self) -> bool {
        matches!(self, EntryError::QuotaExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_message_reports_limit_and_remaining() {
        let err = EntryError::QuotaExceeded {
            category: Category::Formative,
            quota: 60.0,
            remaining: 40.0,
        };
        assert_eq!(
            err.to_string(),
            "Cannot add weight: that would exceed FA limit of 60.\nRemaining FA quota: 40.00. Try a smaller weight."
        );
        assert!(err.abandons_entry());
    }

    #[test]
    fn range_messages_are_field_specific() {
        let score = EntryError::OutOfRange {
            field: NumericField::Score,
        };
        let weight = EntryError::OutOfRange {
            field: NumericField::Weight,
        };
        assert_eq!(score.to_string(), "Grade must be between 0 and 100.");
        assert_eq!(weight.to_string(), "Weight must be a positive number.");
        assert!(!weight.abandons_entry());
    }
}
