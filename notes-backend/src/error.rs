use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotesError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("note not found")]
    NotFound(u64),

    #[error("malformatted id")]
    MalformedId(String),

    #[error("note ids exhausted")]
    IdsExhausted,
}

pub type Result<T> = std::result::Result<T, NotesError>;

impl ResponseError for NotesError {
    fn status_code(&self) -> StatusCode {
        match self {
            NotesError::InvalidInput(_) | NotesError::MalformedId(_) => StatusCode::BAD_REQUEST,
            NotesError::NotFound(_) => StatusCode::NOT_FOUND,
            NotesError::IdsExhausted => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            NotesError::InvalidInput("content missing".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(NotesError::NotFound(7).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            NotesError::MalformedId("abc".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NotesError::IdsExhausted.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_messages_do_not_leak_ids() {
        assert_eq!(NotesError::NotFound(42).to_string(), "note not found");
        assert_eq!(NotesError::MalformedId("x1".into()).to_string(), "malformatted id");
    }
}
