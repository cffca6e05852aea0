//! Domain error types

use thiserror::Error;

/// Message shown when a submit is attempted with nothing to analyze
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a name";

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The query was empty after trimming
    #[error("Please enter a name")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_display() {
        let error = DomainError::EmptyName;
        assert_eq!(error.to_string(), EMPTY_NAME_MESSAGE);
    }
}
