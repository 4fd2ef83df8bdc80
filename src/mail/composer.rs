//! Mail draft construction and the system `mailto:` composer

use super::traits::MailComposer;
use crate::platform;
use thiserror::Error;

/// Errors from the hand-off boundary. Validation failure is not an error
/// here; a draft only exists once validation has accepted the submission.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("no recipient address configured")]
    MissingRecipient,
    #[error("failed to launch mail client: {0}")]
    Launch(#[from] std::io::Error),
}

/// A fully composed message ready for the external mail composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// Build the draft for a contact form submission. Field values are
    /// expected to be trimmed already.
    pub fn contact(name: &str, email: &str, message: &str, recipient: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("Portfolio Contact from {name}"),
            body: format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}"),
        }
    }

    /// Render the draft as a `mailto:` URI with percent-encoded query parts
    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body),
        )
    }
}

/// Composer that hands the draft to the OS default mail client
#[derive(Debug, Default)]
pub struct SystemComposer;

impl MailComposer for SystemComposer {
    fn compose(&mut self, draft: &MailDraft) -> Result<(), ComposeError> {
        if draft.recipient.trim().is_empty() {
            return Err(ComposeError::MissingRecipient);
        }

        let uri = draft.to_mailto_uri();
        tracing::info!(recipient = %draft.recipient, "opening mail composer");

        // Fire-and-forget: the opener detaches, we never wait on it
        platform::opener_command(&uri).spawn()?;
        Ok(())
    }
}
