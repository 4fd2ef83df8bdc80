//! Mail hand-off boundary
//!
//! Message "delivery" is delegated to the user's default mail composer via
//! a `mailto:` URI; nothing is transmitted by this process and no delivery
//! confirmation is observed.

mod composer;
mod traits;

pub use composer::{ComposeError, MailDraft, SystemComposer};
pub use traits::MailComposer;

#[cfg(test)]
pub use traits::MockMailComposer;
