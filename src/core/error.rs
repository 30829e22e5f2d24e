//! Typed error handling for the blog-list service
//!
//! Every fallible operation in the crate returns [`BlogResult`]. The error
//! hierarchy maps onto HTTP status codes so handlers can simply use `?`.
//!
//! # Error Categories
//!
//! - [`BlogError::NotFound`]: the requested blog does not exist
//! - [`ValidationError`]: malformed or incomplete input
//! - [`StorageError`]: the record store failed
//! - [`ConfigError`]: configuration could not be loaded
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_blog(service: &dyn BlogService, id: Uuid) -> BlogResult<Blog> {
//!     service.get(&id).await?.ok_or(BlogError::NotFound { id })
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the blog-list service
#[derive(Debug, Error)]
pub enum BlogError {
    /// No blog with this id
    #[error("blog with id '{id}' not found")]
    NotFound { id: Uuid },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::NotFound { .. } => StatusCode::NOT_FOUND,
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BlogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BlogError::NotFound { .. } => "BLOG_NOT_FOUND",
            BlogError::Validation(e) => e.error_code(),
            BlogError::Storage(_) => "STORAGE_ERROR",
            BlogError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            BlogError::NotFound { id } => Some(serde_json::json!({ "id": id.to_string() })),
            BlogError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed their constraints
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Invalid id format: '{value}'")]
    InvalidUuid { value: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidUuid { .. } => "INVALID_ID",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a [`BlogService`](crate::core::BlogService) backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{backend} lock poisoned: {message}")]
    LockPoisoned { backend: String, message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config{}: {message}", in_file(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("IO error: {message}")]
    IoError { message: String },
}

fn in_file(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<validator::ValidationErrors> for BlogError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldValidationError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        // field_errors() is a HashMap; keep the output stable
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        BlogError::Validation(ValidationError::FieldErrors(fields))
    }
}

impl From<serde_json::Error> for BlogError {
    fn from(err: serde_json::Error) -> Self {
        BlogError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for BlogError {
    fn from(err: std::io::Error) -> Self {
        BlogError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for BlogError {
    fn from(err: serde_yaml::Error) -> Self {
        BlogError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// A specialized Result type for blog-list operations
pub type BlogResult<T> = Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_and_status() {
        let err = BlogError::NotFound { id: Uuid::nil() };
        assert!(err.to_string().contains("not found"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "BLOG_NOT_FOUND");
    }

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError {
                field: "title".to_string(),
                message: "required".to_string(),
            },
            FieldValidationError {
                field: "url".to_string(),
                message: "required".to_string(),
            },
        ]);
        let display = err.to_string();
        assert!(display.contains("title"));
        assert!(display.contains("url"));
    }

    #[test]
    fn test_error_response_has_details() {
        let err = BlogError::NotFound { id: Uuid::nil() };
        let response = err.to_response();
        assert_eq!(response.code, "BLOG_NOT_FOUND");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_storage_error_is_500() {
        let err: BlogError = StorageError::LockPoisoned {
            backend: "memory".to_string(),
            message: "writer panicked".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("memory"));
    }

    #[test]
    fn test_config_parse_error_mentions_file() {
        let err = ConfigError::ParseError {
            file: Some("bloglist.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("bloglist.yaml"));

        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: BlogError = json_err.into();
        assert!(matches!(
            err,
            BlogError::Validation(ValidationError::InvalidJson { .. })
        ));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
