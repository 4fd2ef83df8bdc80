//! Application state definitions

use super::contact_form::ContactForm;
use super::page::{PageMap, ScrollState, Section};
use super::reveal::RevealState;
use super::toast::Toast;
use super::typing_state::TypingState;
use crate::content::Portfolio;
use std::time::{Duration, Instant};

/// Where key input currently goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Page scrolling and navigation
    #[default]
    Page,
    /// Editing the contact form
    ContactForm,
    /// An overlay dialog is open and traps focus
    Dialog,
}

/// Visual pressed/cooldown state of the Send button. Purely cosmetic:
/// it never gates validation, so an immediate resubmit still runs a
/// full pass.
#[derive(Debug, Clone, Copy)]
pub struct SubmitPress {
    pressed_at: Instant,
}

impl SubmitPress {
    const COOLDOWN: Duration = Duration::from_millis(2000);

    pub fn new() -> Self {
        Self {
            pressed_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.pressed_at.elapsed() >= Self::COOLDOWN
    }
}

impl Default for SubmitPress {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
pub struct AppState {
    pub focus: Focus,
    pub scroll: ScrollState,
    pub page: PageMap,
    pub contact_form: ContactForm,
    pub typing: TypingState,
    pub reveal: RevealState,

    /// Success/feedback notification, auto-dismissed
    pub toast: Option<Toast>,
    /// Queued error messages shown in a dialog overlay
    pub errors: Vec<String>,
    /// Focused element inside the open dialog (focus trap index)
    pub dialog_focus: usize,
    /// Card index currently under the mouse cursor
    pub hovered_card: Option<usize>,
    /// Send button cooldown animation
    pub submit_press: Option<SubmitPress>,
}

impl AppState {
    pub fn new(content: &Portfolio, viewport: (u16, u16), reduced_motion: bool) -> Self {
        let page = PageMap::build(content, viewport);
        let item_count = page.reveal_items().len();
        let line1 = content.profile.title_line1.clone();
        let line2 = content.profile.title_line2.clone();

        Self {
            focus: Focus::Page,
            scroll: ScrollState::new(),
            page,
            contact_form: ContactForm::new(),
            typing: if reduced_motion {
                TypingState::completed(line1, line2)
            } else {
                TypingState::new(line1, line2)
            },
            reveal: if reduced_motion {
                RevealState::settled(item_count)
            } else {
                RevealState::new(item_count)
            },
            toast: None,
            errors: Vec::new(),
            dialog_focus: 0,
            hovered_card: None,
            submit_press: None,
        }
    }

    pub fn active_section(&self) -> Section {
        self.page.active_section(self.scroll.offset)
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn pop_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast::new(text));
    }

    /// Drop expired transient state; called once per tick
    pub fn expire_transients(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        if self.submit_press.as_ref().is_some_and(SubmitPress::is_expired) {
            self.submit_press = None;
        }
    }
}
