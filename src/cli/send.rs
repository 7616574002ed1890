use std::time::Duration;

use anyhow::Result;
use folio_contact::{ContactClient, ContactForm};

/// Submit a contact form to a relay endpoint and report the outcome.
pub async fn send(endpoint: String, form: ContactForm, timeout: Duration) -> Result<()> {
    let client = ContactClient::new(endpoint, timeout)?;

    tracing::info!(endpoint = %client.endpoint(), "Submitting contact form");

    let status = form.submit(&client).await;
    let feedback = status.feedback();

    if !status.is_sent() {
        anyhow::bail!(feedback);
    }

    println!("{feedback}");

    Ok(())
}
