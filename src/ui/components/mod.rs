//! Reusable UI components

mod button;
mod dialog;
mod field;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_help_dialog, HELP_DIALOG_BUTTONS};
pub use field::draw_field;
