use askama::Template;
use folio_contact::ContactSubmission;

use crate::{MailError, Mailer, OutboundEmail};

pub const SENDER_NAME: &str = "Contact Form";

#[derive(Template)]
#[template(path = "contact-submission.html")]
struct ContactSubmissionHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    lines: Vec<&'a str>,
}

pub fn subject(submission: &ContactSubmission) -> String {
    format!("New Contact Form Submission from {}", submission.name)
}

pub fn plain_body(submission: &ContactSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        submission.name, submission.email, submission.message
    )
}

/// HTML body; values are escaped and every newline becomes `<br>`.
pub fn html_body(submission: &ContactSubmission) -> Result<String, MailError> {
    let lines = submission
        .message
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    ContactSubmissionHtmlTemplate {
        name: &submission.name,
        email: &submission.email,
        lines,
    }
    .render()
    .map_err(|e| MailError::Build(e.to_string()))
}

/// Compose the owner notification for a submission.
///
/// The submitter's address is used as the `From` mailbox under the fixed
/// display name, and as `Reply-To`.
pub fn compose(
    submission: &ContactSubmission,
    contact_address: &str,
) -> Result<OutboundEmail, MailError> {
    Ok(OutboundEmail {
        from_name: SENDER_NAME.to_owned(),
        from_address: submission.email.to_owned(),
        to: contact_address.to_owned(),
        reply_to: Some(submission.email.to_owned()),
        subject: subject(submission),
        text: plain_body(submission),
        html: html_body(submission)?,
    })
}

#[tracing::instrument(
    name = "Sending contact notification",
    skip_all,
    fields(to = %contact_address)
)]
pub async fn notify_owner(
    mailer: &dyn Mailer,
    submission: &ContactSubmission,
    contact_address: &str,
) -> Result<String, MailError> {
    let email = compose(submission, contact_address)?;

    mailer.send(&email).await
}
