//! Contact form client.
//!
//! Mirrors what the portfolio page does on submit: check the three inputs,
//! POST them once as JSON to the relay endpoint, and turn whatever comes back
//! into a [`FormStatus`] the UI can show. There is no retry; the user
//! resubmits by hand.

use std::time::Duration;

use reqwest::StatusCode;

use crate::{ContactSubmission, FIELDS, RelayResponse};

/// Outcome of a single submit action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    /// One or more inputs were blank; nothing was sent.
    Incomplete { missing: Vec<&'static str> },
    Sent { provider_response: String },
    /// The endpoint answered with a non-200 status.
    Failed { status: u16, message: String },
    /// No response was received at all.
    Unreachable { reason: String },
}

impl FormStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, FormStatus::Sent { .. })
    }

    /// Text for the success / failure indicator.
    pub fn feedback(&self) -> String {
        match self {
            FormStatus::Incomplete { missing } => {
                format!("Please fill in: {}", missing.join(", "))
            }
            FormStatus::Sent { .. } => "Message sent! I'll get back to you soon.".to_owned(),
            FormStatus::Failed { message, .. } => format!("Failed to send message: {message}"),
            FormStatus::Unreachable { .. } => {
                "Could not submit the form. Check your connection and try again.".to_owned()
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn submit(&self, submission: &ContactSubmission) -> FormStatus {
        let response = match self.http.post(&self.endpoint).json(submission).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Contact endpoint unreachable");
                return FormStatus::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Connection dropped while reading response");
                return FormStatus::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let parsed = serde_json::from_str::<RelayResponse>(&body).ok();

        if status == StatusCode::OK {
            return FormStatus::Sent {
                provider_response: parsed.and_then(|r| r.response).unwrap_or_default(),
            };
        }

        let message = match parsed {
            Some(RelayResponse {
                message,
                error: Some(error),
                ..
            }) => format!("{message}: {error}"),
            Some(RelayResponse { message, .. }) => message,
            None if !body.trim().is_empty() => body,
            None => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned(),
        };

        tracing::info!(status = status.as_u16(), %message, "Contact submission failed");

        FormStatus::Failed {
            status: status.as_u16(),
            message,
        }
    }
}

/// The three inputs of the contact section.
#[derive(Default, Clone, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        FIELDS
            .into_iter()
            .zip([&self.name, &self.email, &self.message])
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| key)
            .collect()
    }

    pub async fn submit(&self, client: &ContactClient) -> FormStatus {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return FormStatus::Incomplete { missing };
        }

        let submission = ContactSubmission::new(&self.name, &self.email, &self.message);

        client.submit(&submission).await
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_blank_inputs_in_field_order() {
        let form = ContactForm {
            name: "Ann".to_owned(),
            email: "  ".to_owned(),
            message: String::new(),
        };

        assert_eq!(form.missing_fields(), vec!["email", "message"]);
    }

    #[tokio::test]
    async fn incomplete_form_does_not_reach_the_network() {
        // Nothing listens on port 9 (discard); an attempted request would come back Unreachable.
        let client = ContactClient::new("http://127.0.0.1:9/sendEmail", Duration::from_secs(1)).unwrap();
        let form = ContactForm {
            name: "Ann".to_owned(),
            ..Default::default()
        };

        let status = form.submit(&client).await;

        assert_eq!(
            status,
            FormStatus::Incomplete {
                missing: vec!["email", "message"]
            }
        );
        assert_eq!(status.feedback(), "Please fill in: email, message");
    }

    #[test]
    fn feedback_distinguishes_network_failure() {
        let unreachable = FormStatus::Unreachable {
            reason: "connection refused".to_owned(),
        };
        let failed = FormStatus::Failed {
            status: 500,
            message: "Error sending email: auth error".to_owned(),
        };

        assert!(unreachable.feedback().starts_with("Could not submit"));
        assert_eq!(
            failed.feedback(),
            "Failed to send message: Error sending email: auth error"
        );
        assert!(!failed.is_sent());
    }

    #[test]
    fn clear_resets_inputs() {
        let mut form = ContactForm {
            name: "Ann".to_owned(),
            email: "ann@x.com".to_owned(),
            message: "Hi".to_owned(),
        };

        form.clear();

        assert_eq!(form.missing_fields(), FIELDS.to_vec());
    }
}
