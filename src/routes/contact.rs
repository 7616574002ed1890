use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, Method, header},
};
use folio_contact::{ContactSubmission, RelayResponse, ValidationError};

use crate::{
    error::{RelayError, RelayResult},
    routes::AppState,
};

/// Relay a contact form submission to the site owner's mailbox.
///
/// Registered for every method so that non-POST requests receive the JSON
/// 405 body instead of an empty router response.
pub async fn action(
    State(app_state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RelayResponse>, RelayError> {
    if method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let body = body?;

    if !is_json(&headers) {
        return Err(ValidationError::MalformedBody(
            "expected an application/json body".to_owned(),
        )
        .into());
    }

    let submission = ContactSubmission::from_slice(&body)?;
    let provider_response = relay(&app_state, &submission).await?;

    Ok(Json(RelayResponse::sent(provider_response)))
}

#[tracing::instrument(
    name = "Relaying contact submission",
    skip_all,
    fields(
        submitter_name = %submission.name,
        submitter_email = %submission.email
    )
)]
async fn relay(app_state: &AppState, submission: &ContactSubmission) -> RelayResult {
    let provider_response = folio_notification::contact::notify_owner(
        app_state.mailer.as_ref(),
        submission,
        &app_state.contact_address,
    )
    .await?;

    tracing::info!(response = %provider_response, "Email sent");

    Ok(provider_response)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || mime.to_ascii_lowercase().ends_with("+json")
        })
}
