//! Key dispatch table
//!
//! All named bindings live in one table built at startup; the key handler
//! resolves (focus, chord) through it and executes the resulting action.
//! Raw printable input into form fields is not a named binding and falls
//! through the table to the text-editing path.

use crate::platform;
use crate::state::{Focus, Section};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    OpenHelp,
    /// Close the current overlay, or leave the form back to the page
    Dismiss,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    JumpTo(Section),
    /// Scroll to the contact section and focus the form
    EnterForm,
    NextField,
    PrevField,
    Submit,
    CopyEmail,
    DialogNextFocus,
    DialogPrevFocus,
    DialogActivate,
}

/// A key chord: code plus required modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Chord {
    const fn bare(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        // SHIFT is ignored so that e.g. '?' resolves whether or not the
        // terminal reports the shift modifier alongside the character
        let relevant = key.modifiers.difference(KeyModifiers::SHIFT);
        self.code == key.code && relevant == self.modifiers
    }
}

/// The dispatch table, constructed once at startup
pub struct KeyMap {
    bindings: Vec<(Focus, Chord, Action)>,
}

impl KeyMap {
    pub fn standard() -> Self {
        use Action::*;
        use KeyCode::*;

        let mut bindings: Vec<(Focus, Chord, Action)> = vec![
            // Page navigation
            (Focus::Page, Chord::bare(Char('q')), Quit),
            (Focus::Page, Chord::bare(Char('?')), OpenHelp),
            (Focus::Page, Chord::bare(Char('j')), ScrollDown),
            (Focus::Page, Chord::bare(Down), ScrollDown),
            (Focus::Page, Chord::bare(Char('k')), ScrollUp),
            (Focus::Page, Chord::bare(Up), ScrollUp),
            (Focus::Page, Chord::bare(Char('d')), Action::PageDown),
            (Focus::Page, Chord::bare(KeyCode::PageDown), Action::PageDown),
            (Focus::Page, Chord::bare(Char('u')), Action::PageUp),
            (Focus::Page, Chord::bare(KeyCode::PageUp), Action::PageUp),
            (Focus::Page, Chord::bare(Home), JumpTo(Section::Home)),
            (Focus::Page, Chord::bare(End), JumpTo(Section::Contact)),
            (Focus::Page, Chord::bare(Char('c')), JumpTo(Section::Contact)),
            (Focus::Page, Chord::bare(Enter), EnterForm),
            (Focus::Page, Chord::bare(Tab), EnterForm),
            (Focus::Page, Chord::bare(Char('y')), CopyEmail),
            // Contact form
            (Focus::ContactForm, Chord::bare(Esc), Dismiss),
            (Focus::ContactForm, Chord::bare(Tab), NextField),
            (Focus::ContactForm, Chord::bare(BackTab), PrevField),
            (
                Focus::ContactForm,
                Chord {
                    code: Char('s'),
                    modifiers: KeyModifiers::CONTROL,
                },
                Submit,
            ),
            (
                Focus::ContactForm,
                Chord {
                    code: Char('y'),
                    modifiers: platform::COPY_MODIFIER,
                },
                CopyEmail,
            ),
            // Dialog (focus trapped inside)
            (Focus::Dialog, Chord::bare(Esc), Dismiss),
            (Focus::Dialog, Chord::bare(Tab), DialogNextFocus),
            (Focus::Dialog, Chord::bare(BackTab), DialogPrevFocus),
            (Focus::Dialog, Chord::bare(Enter), DialogActivate),
            (Focus::Dialog, Chord::bare(Char(' ')), DialogActivate),
        ];

        // Digit hotkeys jump to their section
        for section in Section::ALL {
            bindings.push((
                Focus::Page,
                Chord::bare(Char(section.hotkey())),
                JumpTo(section),
            ));
        }

        Self { bindings }
    }

    /// Resolve a key event for the given focus context
    pub fn resolve(&self, focus: Focus, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(f, chord, _)| *f == focus && chord.matches(key))
            .map(|(_, _, action)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn keymap() -> KeyMap {
        KeyMap::standard()
    }

    #[test]
    fn test_page_bindings_resolve() {
        let map = keymap();
        assert_eq!(
            map.resolve(Focus::Page, &key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            map.resolve(Focus::Page, &key(KeyCode::Char('j'))),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            map.resolve(Focus::Page, &key(KeyCode::Char('3'))),
            Some(Action::JumpTo(Section::Projects))
        );
    }

    #[test]
    fn test_bindings_are_scoped_to_focus() {
        let map = keymap();
        // 'q' quits on the page but types the letter in the form
        assert_eq!(map.resolve(Focus::ContactForm, &key(KeyCode::Char('q'))), None);
        // Tab changes meaning per context
        assert_eq!(
            map.resolve(Focus::Page, &key(KeyCode::Tab)),
            Some(Action::EnterForm)
        );
        assert_eq!(
            map.resolve(Focus::ContactForm, &key(KeyCode::Tab)),
            Some(Action::NextField)
        );
        assert_eq!(
            map.resolve(Focus::Dialog, &key(KeyCode::Tab)),
            Some(Action::DialogNextFocus)
        );
    }

    #[test]
    fn test_ctrl_s_submits_only_in_form() {
        let map = keymap();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(map.resolve(Focus::ContactForm, &ctrl_s), Some(Action::Submit));
        assert_eq!(map.resolve(Focus::Page, &ctrl_s), None);
    }

    #[test]
    fn test_plain_chars_fall_through_in_form() {
        let map = keymap();
        assert_eq!(map.resolve(Focus::ContactForm, &key(KeyCode::Char('a'))), None);
        assert_eq!(map.resolve(Focus::ContactForm, &key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_shift_modifier_is_ignored_for_chars() {
        let map = keymap();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(map.resolve(Focus::Page, &shifted), Some(Action::OpenHelp));
    }

    #[test]
    fn test_dialog_traps_navigation_keys() {
        let map = keymap();
        assert_eq!(map.resolve(Focus::Dialog, &key(KeyCode::Char('j'))), None);
        assert_eq!(
            map.resolve(Focus::Dialog, &key(KeyCode::Esc)),
            Some(Action::Dismiss)
        );
        assert_eq!(
            map.resolve(Focus::Dialog, &key(KeyCode::Enter)),
            Some(Action::DialogActivate)
        );
    }
}
