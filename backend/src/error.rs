//! Input validation errors for facet searches.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },
    #[error("{field} must be a whole number, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },
    #[error("{field} must start with a four digit year, got {value:?}")]
    NotAYear { field: &'static str, value: String },
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
}
