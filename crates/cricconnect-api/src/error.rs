use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use cricconnect_types::api::ErrorBody;

/// Every failure a handler can report. Rendered as `{ success: false, message, .. }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller input failed field checks; one human-readable entry per problem.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Body could not be decoded at all.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Body exceeded the configured size cap before it could be decoded.
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("malformed id '{0}'")]
    MalformedId(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) | Self::MalformedId(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Bodies over the size cap keep their 413; every other decode failure is a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

/// Query strings that cannot be decoded (repeated keys, for one) are reported
/// like any other bad parameter.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(vec![rejection.body_text()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Validation(errors) => {
                debug!("Rejected input: {}", errors.join("; "));
                ErrorBody {
                    errors: Some(errors),
                    ..ErrorBody::new("Validation error")
                }
            }
            Self::BadRequest(reason) => {
                debug!("Rejected body: {}", reason);
                ErrorBody {
                    errors: Some(vec![reason]),
                    ..ErrorBody::new("Invalid request body")
                }
            }
            Self::PayloadTooLarge(reason) => {
                debug!("Rejected oversized body: {}", reason);
                ErrorBody {
                    errors: Some(vec![reason]),
                    ..ErrorBody::new("Request body too large")
                }
            }
            Self::MalformedId(id) => {
                debug!("Malformed id '{}'", id);
                ErrorBody::new("Resource not found - Invalid ID format")
            }
            Self::NotFound(what) => ErrorBody::new(what),
            Self::Persistence { context, source } => {
                error!("{}: {:#}", context, source);
                ErrorBody {
                    error: Some(source.to_string()),
                    ..ErrorBody::new(context)
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
