use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use np_core::{Error, ErrorKind};
use serde::Serialize;
use serde_json::Value;

use crate::logging::Logger;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// An [`Error`] on its way out of a handler, tagged with the endpoint so the
/// log line says where it happened.
#[derive(Debug)]
pub struct ApiError {
    pub endpoint: &'static str,
    pub error: Error,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub trait AtEndpoint<T> {
    fn at(self, endpoint: &'static str) -> ApiResult<T>;
}

impl<T> AtEndpoint<T> for np_core::Result<T> {
    fn at(self, endpoint: &'static str) -> ApiResult<T> {
        self.map_err(|error| ApiError { endpoint, error })
    }
}

pub fn error_body(err: &Error) -> ErrorBody {
    let details = match err.kind() {
        ErrorKind::AiService | ErrorKind::Publish => err.upstream().map(|u| u.details()),
        _ => None,
    };
    ErrorBody {
        error: err.to_string(),
        details,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let log = Logger::new().with_prefix(self.endpoint);
        match self.error.upstream() {
            Some(upstream) => log.error(&format!("{}: {}", self.error, upstream)),
            None if self.error.status_code() >= 500 => log.error(&self.error.to_string()),
            None => log.warn(&self.error.to_string()),
        }

        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(error_body(&self.error))).into_response()
    }
}
