//! Application controller: input handling and the submission flow

use crate::config::TuiConfig;
use crate::content::{Portfolio, DEFAULT_RECIPIENT};
use crate::keymap::{Action, KeyMap};
use crate::mail::{MailComposer, MailDraft, SystemComposer};
use crate::state::{
    AppState, Focus, Section, SubmitPress, INTERSECT_MARGIN, NAVBAR_HEIGHT, SEND_ROW,
};
use crate::ui::components::HELP_DIALOG_BUTTONS;
use crate::ui::layout;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::path::Path;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: f32 = 3.0;

pub struct App {
    pub state: AppState,
    pub content: Portfolio,
    recipient: String,
    keymap: KeyMap,
    composer: Box<dyn MailComposer>,
    viewport: (u16, u16),
    should_quit: bool,
}

impl App {
    pub fn new(viewport: (u16, u16)) -> Result<Self> {
        let config = match TuiConfig::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load config, using defaults: {e:#}");
                TuiConfig::default()
            }
        };

        let content = match &config.content_path {
            Some(path) => Portfolio::load(Path::new(path))?,
            None => Portfolio::builtin(),
        };

        let recipient = config
            .recipient
            .clone()
            .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string());

        let state = AppState::new(&content, viewport, config.reduced_motion());

        Ok(Self {
            state,
            content,
            recipient,
            keymap: KeyMap::standard(),
            composer: Box::new(SystemComposer),
            viewport,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether any time-driven effect needs fast redraws right now
    pub fn is_animating(&self) -> bool {
        !self.state.typing.is_complete()
            || self.state.scroll.is_animating()
            || self.state.reveal.is_animating()
            || self.state.toast.is_some()
            || self.state.submit_press.is_some()
    }

    /// Advance animations and recompute geometry; called once per loop
    pub fn tick(&mut self, size: (u16, u16)) {
        if size != self.viewport {
            self.viewport = size;
            self.state.page = crate::state::PageMap::build(&self.content, size);
        }

        self.state.scroll.update();
        let max = self.state.page.max_scroll(self.viewport.1);
        if self.state.scroll.offset > max {
            self.state.scroll.offset = max;
        }

        self.update_reveals();
        self.state.expire_transients();
    }

    /// Mark reveal items currently intersecting the viewport
    fn update_reveals(&mut self) {
        let scroll = self.state.scroll.offset;
        let viewport_h = self.viewport.1.saturating_sub(NAVBAR_HEIGHT + 1);
        let bottom = scroll + f32::from(viewport_h.saturating_sub(INTERSECT_MARGIN));

        let visible: Vec<usize> = self
            .state
            .page
            .reveal_items()
            .into_iter()
            .enumerate()
            .filter(|&(_, (top, height))| {
                f32::from(top) < bottom && f32::from(top + height) > scroll
            })
            .map(|(i, _)| i)
            .collect();
        self.state.reveal.observe_visible(&visible);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key fast-forwards the hero title
        if !self.state.typing.is_complete() {
            self.state.typing.skip();
        }

        // An error dialog outranks everything else
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.state.pop_error();
            }
            return;
        }

        if let Some(action) = self.keymap.resolve(self.state.focus, &key) {
            self.execute_action(action);
            return;
        }

        // Unbound keys edit the active form field
        if self.state.focus == Focus::ContactForm {
            self.handle_form_input(key);
        }
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::OpenHelp => {
                self.state.dialog_focus = 0;
                self.state.focus = Focus::Dialog;
            }
            Action::Dismiss => match self.state.focus {
                Focus::Dialog | Focus::ContactForm => self.state.focus = Focus::Page,
                Focus::Page => {}
            },
            Action::ScrollDown => self.scroll_by(1.0),
            Action::ScrollUp => self.scroll_by(-1.0),
            Action::PageDown => self.scroll_by(f32::from(self.page_height())),
            Action::PageUp => self.scroll_by(-f32::from(self.page_height())),
            Action::JumpTo(section) => self.jump_to(section),
            Action::EnterForm => {
                self.jump_to(Section::Contact);
                self.state.focus = Focus::ContactForm;
            }
            Action::NextField => self.state.contact_form.next_field(),
            Action::PrevField => self.state.contact_form.prev_field(),
            Action::Submit => self.submit_contact_form(),
            Action::CopyEmail => self.copy_email(),
            Action::DialogNextFocus => {
                self.state.dialog_focus = (self.state.dialog_focus + 1) % HELP_DIALOG_BUTTONS.len();
            }
            Action::DialogPrevFocus => {
                let n = HELP_DIALOG_BUTTONS.len();
                self.state.dialog_focus = (self.state.dialog_focus + n - 1) % n;
            }
            Action::DialogActivate => {
                // The help dialog's only button closes it
                self.state.focus = Focus::Page;
            }
        }
    }

    fn page_height(&self) -> u16 {
        self.viewport.1.saturating_sub(NAVBAR_HEIGHT + 1)
    }

    fn scroll_by(&mut self, delta: f32) {
        let max = self.state.page.max_scroll(self.viewport.1);
        self.state.scroll.scroll_by(delta, max);
    }

    /// Smooth scroll so the section lands right below the navbar
    fn jump_to(&mut self, section: Section) {
        let max = self.state.page.max_scroll(self.viewport.1);
        let target = f32::from(self.state.page.top_of(section)).min(max);
        self.state.scroll.animate_to(target);
    }

    fn handle_form_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                // Enter inserts a newline in the message box; anywhere
                // else on the form it submits
                let idx = self.state.contact_form.active_field_index;
                let multiline = self
                    .state
                    .contact_form
                    .field(idx)
                    .is_some_and(|f| f.is_multiline);
                if multiline {
                    if let Some(field) = self.state.contact_form.active_field_mut() {
                        field.push_char('\n');
                    }
                    self.revalidate_contact_form();
                } else {
                    self.submit_contact_form();
                }
                return;
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.contact_form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.contact_form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => return,
        }

        self.revalidate_contact_form();
    }

    /// Editing a field that carries an invalid annotation re-runs the
    /// whole validation pass, so all three annotations refresh together.
    /// Fields without an invalid marker never gain one mid-edit.
    fn revalidate_contact_form(&mut self) {
        let form = &mut self.state.contact_form;
        let idx = form.active_field_index;
        let invalid = form.field(idx).is_some_and(|f| f.status.is_invalid());
        if !invalid {
            return;
        }

        let report = form.validate();
        form.apply_report(&report);
    }

    /// Full validation pass; on accept, hand the draft to the composer
    fn submit_contact_form(&mut self) {
        let report = self.state.contact_form.validate();
        self.state.contact_form.apply_report(&report);

        if !report.is_accepted() {
            tracing::debug!("contact form rejected");
            return;
        }

        let form = &self.state.contact_form;
        let draft = MailDraft::contact(
            form.name.trimmed(),
            form.email.trimmed(),
            form.message.trimmed(),
            &self.recipient,
        );

        match self.composer.compose(&draft) {
            Ok(()) => {
                self.state.contact_form.reset();
                self.state.submit_press = Some(SubmitPress::new());
                self.state
                    .show_toast("Message opened in your mail client. Thank you!");
            }
            Err(e) => {
                tracing::error!("mail composer failed: {e}");
                self.state.push_error(format!("Could not open mail client: {e}"));
            }
        }
    }

    fn copy_email(&mut self) {
        let email = self.content.profile.email.clone();
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(email)) {
            Ok(()) => self.state.show_toast("Email copied to clipboard"),
            Err(e) => {
                tracing::warn!("clipboard unavailable: {e}");
                self.state.push_error(format!("Clipboard unavailable: {e}"));
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::Moved => self.handle_hover(mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if self.state.focus == Focus::Dialog || self.state.current_error().is_some() {
            return;
        }

        if row < NAVBAR_HEIGHT {
            if let Some(section) = layout::navbar_hit(column, self.viewport.0) {
                self.state.focus = Focus::Page;
                self.jump_to(section);
            }
            return;
        }

        let Some(page_row) = self.page_row(row) else {
            return;
        };

        // Clicking a form row focuses the form on that field; clicking
        // the Send button submits
        let form_top = self.state.page.form_top;
        let mut field_top = form_top;
        for (i, height) in crate::state::PageMap::FORM_FIELD_HEIGHTS.iter().enumerate() {
            if page_row >= field_top && page_row < field_top + height {
                self.state.focus = Focus::ContactForm;
                self.state.contact_form.active_field_index = i;
                return;
            }
            field_top += height;
        }
        if page_row >= field_top && page_row < field_top + 3 {
            self.state.focus = Focus::ContactForm;
            self.state.contact_form.active_field_index = SEND_ROW;
            self.submit_contact_form();
        }
    }

    fn handle_hover(&mut self, row: u16) {
        let Some(page_row) = self.page_row(row) else {
            self.state.hovered_card = None;
            return;
        };

        self.state.hovered_card = self
            .state
            .page
            .cards
            .iter()
            .position(|&(top, height)| page_row >= top && page_row < top + height);
    }

    /// Screen row to page row, None above the viewport
    fn page_row(&self, row: u16) -> Option<u16> {
        if row < NAVBAR_HEIGHT {
            return None;
        }
        let offset = self.state.scroll.offset.round() as u16;
        Some(row - NAVBAR_HEIGHT + offset)
    }
}
