//! Email notification service using lettre

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    transport::smtp::{authentication::Credentials, response::Response},
};
use serde::Deserialize;

use crate::OutboundEmail;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid email address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("mail server did not answer within {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Provider(String),
}

/// Outbound mail provider.
///
/// A send either resolves to the provider's reply (for SMTP, the final
/// status line such as `250 OK`) or fails; there is no retry at this level.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &OutboundEmail) -> Result<String, MailError>;
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_smtp_tls")]
    pub smtp_tls: bool,
    /// Mailbox that receives contact submissions.
    #[serde(default)]
    pub contact_address: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_tls: default_smtp_tls(),
            contact_address: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl EmailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Check that `contact_address` parses as a mailbox address.
    pub fn validate_contact_address(&self) -> Result<(), MailError> {
        crate::message::parse(&self.contact_address).map(|_| ())
    }

    fn has_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_tls() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    10
}

/// SMTP mailer. Cheap to clone; the connection pool is shared and
/// connections are opened on first use.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    timeout: Duration,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> Result<Self, MailError> {
        let timeout = config.timeout();

        let mut builder = if config.smtp_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| MailError::Smtp(e.to_string()))?
        } else {
            // Plain connection, e.g. MailDev on localhost
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        };

        builder = builder.port(config.smtp_port).timeout(Some(timeout));

        if config.has_credentials() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                tls = config.smtp_tls,
                "Email service initialized with authentication"
            );

            builder = builder.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ));
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                tls = config.smtp_tls,
                "SMTP credentials not configured, using unauthenticated connection"
            );
        }

        Ok(Self {
            transport: builder.build(),
            timeout,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<String, MailError> {
        let message = email.to_message()?;

        tracing::info!(to = %email.to, subject = %email.subject, "Sending email");

        let response = tokio::time::timeout(self.timeout, self.transport.send(message))
            .await
            .map_err(|_| MailError::Timeout(self.timeout))?
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(describe(&response))
    }
}

fn describe(response: &Response) -> String {
    let lines = response.message().collect::<Vec<_>>();

    format!("{} {}", response.code(), lines.join(" "))
        .trim_end()
        .to_owned()
}
