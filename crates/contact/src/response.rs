use serde::{Deserialize, Serialize};

pub const SENT_MESSAGE: &str = "Email sent successfully";
pub const SEND_FAILED_MESSAGE: &str = "Error sending email";
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: name, email, or message";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST requests are allowed";

/// JSON body returned by the relay endpoint for every outcome.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn sent(provider_response: impl Into<String>) -> Self {
        Self {
            message: SENT_MESSAGE.to_owned(),
            response: Some(provider_response.into()),
            error: None,
        }
    }

    pub fn send_failed(error: impl Into<String>) -> Self {
        Self {
            message: SEND_FAILED_MESSAGE.to_owned(),
            response: None,
            error: Some(error.into()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejected_body_only_carries_message() {
        let body = serde_json::to_value(RelayResponse::rejected(METHOD_NOT_ALLOWED_MESSAGE)).unwrap();

        assert_eq!(body, json!({"message": "Only POST requests are allowed"}));
    }

    #[test]
    fn sent_body_carries_provider_response() {
        let body = serde_json::to_value(RelayResponse::sent("250 OK")).unwrap();

        assert_eq!(
            body,
            json!({"message": "Email sent successfully", "response": "250 OK"})
        );
    }
}
