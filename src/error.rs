use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::str::Utf8Error;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to decode XML: {0}")]
    DecodeError(String),

    #[error("failed to encode XML: {0}")]
    EncodeError(#[from] quick_xml::SeError),

    #[error("failed to convert question {id}: {reason}")]
    ConvertError { id: i64, reason: String },

    #[error("{0}")]
    ValidationError(String),

    #[error("failed to {operation}{}: {source}", question_suffix(.id))]
    PersistenceError {
        operation: &'static str,
        id: Option<i64>,
        #[source]
        source: sqlx::Error,
    },

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("multipart error: {0}")]
    MultipartError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

fn question_suffix(id: &Option<i64>) -> String {
    id.map(|id| format!(" (question {id})")).unwrap_or_default()
}

impl Error {
    pub fn persistence(operation: &'static str, id: Option<i64>) -> impl FnOnce(sqlx::Error) -> Error {
        move |source| Error::PersistenceError { operation, id, source }
    }
}

impl From<sqlx::Error> for Error {
    fn from(source: sqlx::Error) -> Self {
        Error::PersistenceError {
            operation: "access database",
            id: None,
            source,
        }
    }
}

impl From<quick_xml::DeError> for Error {
    fn from(e: quick_xml::DeError) -> Self {
        Error::DecodeError(e.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::DecodeError(e.to_string())
    }
}

impl From<actix_multipart::MultipartError> for Error {
    fn from(e: actix_multipart::MultipartError) -> Self {
        Error::MultipartError(e.to_string())
    }
}

impl From<Utf8Error> for Error {
    fn from(e: Utf8Error) -> Self {
        Error::DecodeError(e.to_string())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::DecodeError(_) | Error::ValidationError(_) | Error::BadRequest(_) | Error::MultipartError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
