use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::{MailError, Mailer, OutboundEmail};

#[derive(Clone, Debug)]
enum Outcome {
    Respond(String),
    Fail(String),
}

/// In-memory mailer for tests and local dry runs.
///
/// Records every email it is asked to send and answers with a fixed
/// outcome. Clones share the same record.
#[derive(Clone, Debug)]
pub struct MockMailer {
    outcome: Outcome,
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl MockMailer {
    pub fn succeeding(response: impl Into<String>) -> Self {
        Self::with(Outcome::Respond(response.into()))
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self::with(Outcome::Fail(error.into()))
    }

    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            sent: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<String, MailError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(email.clone());

        match &self.outcome {
            Outcome::Respond(response) => Ok(response.clone()),
            Outcome::Fail(error) => Err(MailError::Provider(error.clone())),
        }
    }
}
