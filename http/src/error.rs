use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pixfit_application::ApplicationError;

/// Plain-text HTTP failure. Bodies carry the exact rejection message so
/// callers can see which rule fired.
#[derive(Debug)]
pub enum HttpError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            HttpError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, message).into_response()
    }
}

/// Fold the application taxonomy down to status classes: everything
/// attributable to the request or the source URL is a 400, service faults
/// are 500.
pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::Validation(message) => HttpError::BadRequest { message },
        ApplicationError::Domain(domain) => {
            if domain.is_client_fault() {
                HttpError::BadRequest {
                    message: domain.to_string(),
                }
            } else {
                HttpError::Internal {
                    message: domain.to_string(),
                }
            }
        }
        ApplicationError::Internal(message) => HttpError::Internal { message },
    }
}
