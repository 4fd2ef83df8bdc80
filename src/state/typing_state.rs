//! Hero title typing animation
//!
//! The two-line hero title reveals character by character: a 1 s initial
//! delay, then line one at 150 ms per character, then line two at 100 ms
//! per character. Any key skips straight to the full title.

use std::time::{Duration, Instant};

const START_DELAY: Duration = Duration::from_millis(1000);
const LINE1_CHAR_INTERVAL: Duration = Duration::from_millis(150);
const LINE2_CHAR_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct TypingState {
    started: Instant,
    line1: String,
    line2: String,
    skipped: bool,
}

impl TypingState {
    pub fn new(line1: String, line2: String) -> Self {
        Self {
            started: Instant::now(),
            line1,
            line2,
            skipped: false,
        }
    }

    /// Start with the full title already revealed (reduced motion)
    pub fn completed(line1: String, line2: String) -> Self {
        let mut state = Self::new(line1, line2);
        state.skipped = true;
        state
    }

    /// Number of characters of each line revealed at this instant
    fn revealed_counts(&self) -> (usize, usize) {
        let len1 = self.line1.chars().count();
        let len2 = self.line2.chars().count();
        if self.skipped {
            return (len1, len2);
        }

        let elapsed = self.started.elapsed();
        if elapsed < START_DELAY {
            return (0, 0);
        }

        let typing = elapsed - START_DELAY;
        let line1_total = LINE1_CHAR_INTERVAL * len1 as u32;
        if typing < line1_total {
            let n1 = (typing.as_millis() / LINE1_CHAR_INTERVAL.as_millis()) as usize;
            return (n1.min(len1), 0);
        }

        let line2_elapsed = typing - line1_total;
        let n2 = (line2_elapsed.as_millis() / LINE2_CHAR_INTERVAL.as_millis()) as usize;
        (len1, n2.min(len2))
    }

    /// Currently visible prefixes of the two title lines
    pub fn visible(&self) -> (String, String) {
        let (n1, n2) = self.revealed_counts();
        (
            self.line1.chars().take(n1).collect(),
            self.line2.chars().take(n2).collect(),
        )
    }

    /// Skip to the full title (user pressed a key)
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    pub fn is_complete(&self) -> bool {
        let (n1, n2) = self.revealed_counts();
        n1 == self.line1.chars().count() && n2 == self.line2.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nothing_visible_during_initial_delay() {
        let state = TypingState::new("Hi, I'm Jane".to_string(), "I build things".to_string());
        assert_eq!(state.visible(), (String::new(), String::new()));
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_reveals_everything() {
        let mut state = TypingState::new("Hi".to_string(), "there".to_string());
        state.skip();
        assert_eq!(state.visible(), ("Hi".to_string(), "there".to_string()));
        assert!(state.is_complete());
    }

    #[test]
    fn test_completed_constructor_is_complete() {
        let state = TypingState::completed("Hi".to_string(), "there".to_string());
        assert!(state.is_complete());
    }

    #[test]
    fn test_multiple_skips_do_not_break() {
        let mut state = TypingState::new("Hi".to_string(), "there".to_string());
        state.skip();
        state.skip();
        assert!(state.is_complete());
    }

    #[test]
    fn test_empty_lines_complete_after_delay_only() {
        let mut state = TypingState::new(String::new(), String::new());
        // Counts are zero no matter the phase, so skip just confirms it
        state.skip();
        assert!(state.is_complete());
        assert_eq!(state.visible(), (String::new(), String::new()));
    }

    // The per-character timing path is time-driven; as elsewhere, we
    // assert the endpoints (pre-delay emptiness, post-skip completeness)
    // rather than mocking the clock.
}
