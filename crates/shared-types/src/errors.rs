//! Common error types used across all timeline crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all timeline operations
///
/// None of these ever reach the grid renderer: the data layer resolves
/// failures to an empty event list before anything is laid out.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TimelineError {
    // Data-related errors
    #[error("Event fetch failed: {message}")]
    DataFetch { message: String },

    #[error("Event data parse error: {message}")]
    DataParse { message: String },

    #[error("Event not found: {title}")]
    EventNotFound { title: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // Generic errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: TimelineError,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
}

impl ErrorResponse {
    pub fn new(error: TimelineError) -> Self {
        Self {
            success: false,
            error,
            context: None,
        }
    }

    /// Add context to the error response
    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
        });
        self
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"Internal","details":{"message":"Failed to serialize error"}}}"#.to_string()
        })
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        TimelineError::DataParse {
            message: err.to_string(),
        }
    }
}
