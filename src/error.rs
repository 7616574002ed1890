use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_contact::{
    METHOD_NOT_ALLOWED_MESSAGE, MISSING_FIELDS_MESSAGE, RelayResponse, ValidationError,
};
use folio_notification::MailError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unreadable body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("Provider failure: {0}")]
    ProviderFailure(#[from] MailError),
}

/// Provider response on success, the reason the relay stopped otherwise.
pub type RelayResult = Result<String, RelayError>;

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            RelayError::InvalidRequest(reason) => {
                tracing::info!(%reason, "Rejected contact submission");
                (
                    StatusCode::BAD_REQUEST,
                    RelayResponse::rejected(MISSING_FIELDS_MESSAGE),
                )
            }
            RelayError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                RelayResponse::rejected(METHOD_NOT_ALLOWED_MESSAGE),
            ),
            RelayError::UnreadableBody(rejection) => {
                tracing::info!(%rejection, "Could not read contact submission body");
                (
                    rejection.status(),
                    RelayResponse::rejected(rejection.body_text()),
                )
            }
            RelayError::ProviderFailure(e) => {
                tracing::error!(error = %e, "Error sending email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RelayResponse::send_failed(e.to_string()),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
