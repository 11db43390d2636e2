//! Error types
//!
//! Every error here is recovered locally: reported as an inline console line,
//! after which the loop returns to the menu. None are fatal.

use thiserror::Error;

use crate::store::TaskId;

/// Errors raised while parsing interactive input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid option: {input}")]
    InvalidSelection { input: String },

    #[error("Invalid date '{input}' (expected {format})")]
    InvalidDate { input: String, format: String },

    #[error("Invalid task id: {input}")]
    InvalidId { input: String },
}

/// Errors raised by TaskStore lookups
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task not found: {id}")]
    NotFound { id: TaskId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = InputError::InvalidDate {
            input: "notadate".to_string(),
            format: "%d/%m/%Y".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("notadate"));
        assert!(msg.contains("%d/%m/%Y"));
    }

    #[test]
    fn test_not_found_message() {
        let err = StoreError::NotFound { id: 99 };
        assert!(err.to_string().contains("99"));
    }
}
