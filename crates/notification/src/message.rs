use lettre::{
    Address, Message,
    message::{Mailbox, MultiPart},
};

use crate::MailError;

/// A fully composed email, independent of the transport that sends it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from_name: String,
    pub from_address: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutboundEmail {
    /// Build the multipart/alternative lettre message.
    pub fn to_message(&self) -> Result<Message, MailError> {
        let from = Mailbox::new(Some(self.from_name.clone()), parse(&self.from_address)?);

        let mut builder = Message::builder()
            .from(from)
            .to(Mailbox::new(None, parse(&self.to)?))
            .subject(self.subject.clone());

        if let Some(reply_to) = &self.reply_to {
            builder = builder.reply_to(Mailbox::new(None, parse(reply_to)?));
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                self.text.clone(),
                self.html.clone(),
            ))
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

pub(crate) fn parse(address: &str) -> Result<Address, MailError> {
    address
        .trim()
        .parse::<Address>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_owned(),
            reason: e.to_string(),
        })
}
