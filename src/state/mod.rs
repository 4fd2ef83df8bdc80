//! Application state module

mod app_state;
mod contact_form;
mod page;
mod reveal;
mod toast;
mod typing_state;

pub use app_state::*;
pub use contact_form::*;
pub use page::*;
pub use reveal::*;
pub use toast::*;
pub use typing_state::*;
