use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Failure reading one of the CSV exports from the data directory.
#[derive(Debug)]
pub enum DataLoadError {
    IoError(String),
    CsvError(String),
}

impl std::fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataLoadError::IoError(err) => write!(f, "I/O error: {}", err),
            DataLoadError::CsvError(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for DataLoadError {}

impl From<std::io::Error> for DataLoadError {
    fn from(err: std::io::Error) -> Self {
        DataLoadError::IoError(err.to_string())
    }
}

impl From<csv::Error> for DataLoadError {
    fn from(err: csv::Error) -> Self {
        DataLoadError::CsvError(err.to_string())
    }
}
