//! Trait abstraction for the mail hand-off to enable mocking in tests

use super::composer::{ComposeError, MailDraft};

/// Boundary through which a composed message leaves the application.
/// Fire-and-forget: a successful return means the hand-off was requested,
/// not that anything was delivered.
#[cfg_attr(test, mockall::automock)]
pub trait MailComposer: Send {
    /// Open the user's mail composer pre-filled with the draft
    fn compose(&mut self, draft: &MailDraft) -> Result<(), ComposeError>;
}
