//! Input errors. They are the only failures: once traversal starts it always
//! produces output, degrading silently where values cannot be used.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Please provide a valid CSS selector or element")]
    InvalidInput,
    #[error("Element not found: {0}")]
    NotFound(String),
    #[error("No element selected. Please select an element first.")]
    NoSelection,
}
