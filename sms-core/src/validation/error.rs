use super::PayloadError;
use crate::models::InvalidRange;
use serde::Serialize;
use thiserror::Error;

/// The ways a location action write can be rejected.
///
/// Every variant maps onto an HTTP status; the HTTP layer renders them with
/// [`ValidationError::to_document`]. `E` is the error type of the repository
/// the validator read from.
#[derive(Debug, Error)]
pub enum ValidationError<E> {
    /// Missing or malformed fields in the request
    #[error("{0}")]
    BadRequest(String),

    /// The record to update does not exist, or references a missing record
    #[error("{0}")]
    NotFound(String),

    /// The request contradicts data that is already stored
    #[error("{0}")]
    Conflict(String),

    /// Stored data violates an invariant the validator relies on
    #[error("{0}")]
    InconsistentData(String),

    /// The repository failed
    #[error("repository failure: {0}")]
    Repository(#[source] E),
}

impl<E> ValidationError<E> {
    /// The HTTP status code of the error
    pub fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::InconsistentData(_) | Self::Repository(_) => 500,
        }
    }

    /// The HTTP reason phrase of the error
    pub fn title(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "Bad Request",
            Self::NotFound(_) => "Not Found",
            Self::Conflict(_) => "Conflict",
            Self::InconsistentData(_) | Self::Repository(_) => "Internal Server Error",
        }
    }
}

impl<E: std::fmt::Display> ValidationError<E> {
    /// Render the error as a JSON:API error document.
    ///
    /// Repository failures are not described to the client.
    pub fn to_document(&self) -> ErrorDocument {
        let detail = match self {
            Self::Repository(_) => "The request could not be processed.".to_owned(),
            other => other.to_string(),
        };
        ErrorDocument {
            errors: vec![ErrorObject {
                status: self.status().to_string(),
                title: self.title(),
                detail,
            }],
        }
    }
}

impl<E> From<PayloadError> for ValidationError<E> {
    fn from(value: PayloadError) -> Self {
        Self::BadRequest(value.to_string())
    }
}

impl<E> From<InvalidRange> for ValidationError<E> {
    fn from(value: InvalidRange) -> Self {
        Self::BadRequest(value.to_string())
    }
}

/// A JSON:API top-level document carrying errors.
#[derive(Debug, Serialize)]
pub struct ErrorDocument {
    /// The errors, most relevant first
    pub errors: Vec<ErrorObject>,
}

/// A single JSON:API error object.
#[derive(Debug, Serialize)]
pub struct ErrorObject {
    /// The HTTP status code, as a string
    pub status: String,
    /// The HTTP reason phrase
    pub title: &'static str,
    /// A human readable explanation
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    type Error = ValidationError<std::io::Error>;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::BadRequest("x".into()).status(), 400);
        assert_eq!(Error::NotFound("x".into()).status(), 404);
        assert_eq!(Error::Conflict("x".into()).status(), 409);
        assert_eq!(Error::InconsistentData("x".into()).status(), 500);
        assert_eq!(Error::Repository(std::io::Error::other("disk")).status(), 500);
    }

    #[test]
    fn test_document_keeps_detail_verbatim() {
        let error = Error::Conflict("Usage of archived devices is not allowed".into());
        let document = serde_json::to_value(error.to_document()).unwrap();
        assert_eq!(
            document,
            serde_json::json!({
                "errors": [{
                    "status": "409",
                    "title": "Conflict",
                    "detail": "Usage of archived devices is not allowed",
                }]
            })
        );
    }

    #[test]
    fn test_document_hides_repository_failures() {
        let error = Error::Repository(std::io::Error::other("secret path /var/db"));
        let document = error.to_document();
        assert_eq!(document.errors[0].status, "500");
        assert!(!document.errors[0].detail.contains("secret"));
    }

    #[test]
    fn test_invalid_range_is_a_bad_request() {
        let error: Error = InvalidRange.into();
        assert_eq!(error.status(), 400);
    }
}
