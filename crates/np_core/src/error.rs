use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// What an upstream call gave back when it failed.
///
/// `payload` holds the upstream error body when one was returned, otherwise
/// only `message` (usually the transport error) is known.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamFailure {
    pub message: String,
    pub payload: Option<Value>,
}

impl UpstreamFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            payload: None,
        }
    }

    pub fn with_payload(message: impl Into<String>, payload: Value) -> Self {
        Self {
            message: message.into(),
            payload: Some(payload),
        }
    }

    /// The upstream payload if there is one, the plain message otherwise.
    pub fn details(&self) -> Value {
        self.payload
            .clone()
            .unwrap_or_else(|| Value::String(self.message.clone()))
    }
}

impl fmt::Display for UpstreamFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "{} ({})", self.message, payload),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    NotFound,
    Configuration,
    UpstreamUnavailable,
    UpstreamParse,
    AiService,
    Publish,
    Authentication,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Failed to fetch news")]
    UpstreamUnavailable(UpstreamFailure),

    #[error("Failed to parse news feed")]
    UpstreamParse(UpstreamFailure),

    #[error("Failed to generate post")]
    AiService(UpstreamFailure),

    #[error("Failed to post to LinkedIn")]
    Publish(UpstreamFailure),

    #[error("LinkedIn authentication failed")]
    Authentication(UpstreamFailure),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Error::UpstreamParse(_) => ErrorKind::UpstreamParse,
            Error::AiService(_) => ErrorKind::AiService,
            Error::Publish(_) => ErrorKind::Publish,
            Error::Authentication(_) => ErrorKind::Authentication,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Configuration
            | ErrorKind::UpstreamUnavailable
            | ErrorKind::UpstreamParse
            | ErrorKind::AiService
            | ErrorKind::Publish
            | ErrorKind::Authentication => 500,
        }
    }

    pub fn upstream(&self) -> Option<&UpstreamFailure> {
        match self {
            Error::UpstreamUnavailable(failure)
            | Error::UpstreamParse(failure)
            | Error::AiService(failure)
            | Error::Publish(failure)
            | Error::Authentication(failure) => Some(failure),
            Error::InvalidRequest(_) | Error::NotFound(_) | Error::Configuration(_) => None,
        }
    }
}
