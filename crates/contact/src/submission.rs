use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Field names in the order they are checked and reported.
pub const FIELDS: [&str; 3] = ["name", "email", "message"];

/// A contact request collected by the form. Never persisted.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(String),

    #[error("request body is not a JSON object")]
    NotAnObject,

    #[error("field `{0}` is missing")]
    Missing(&'static str),

    #[error("field `{0}` must be a string")]
    NotAString(&'static str),

    #[error("field `{0}` is empty")]
    Empty(&'static str),
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;

        Self::from_json(&payload)
    }

    /// Extract a submission from an untyped JSON payload.
    ///
    /// Every field must be present, be a JSON string and be non-empty. A
    /// `null` counts as missing; numbers, booleans, arrays and objects are
    /// rejected rather than coerced.
    pub fn from_json(payload: &Value) -> Result<Self, ValidationError> {
        let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        let field = |key: &'static str| match object.get(key) {
            None | Some(Value::Null) => Err(ValidationError::Missing(key)),
            Some(Value::String(value)) => Ok(value.to_owned()),
            Some(_) => Err(ValidationError::NotAString(key)),
        };

        let submission = Self {
            name: field("name")?,
            email: field("email")?,
            message: field("message")?,
        };

        submission.validate().map_err(|errors| {
            let failed = errors.field_errors();
            let key = FIELDS
                .into_iter()
                .find(|key| failed.contains_key(*key))
                .unwrap_or(FIELDS[0]);

            ValidationError::Empty(key)
        })?;

        Ok(submission)
    }
}
