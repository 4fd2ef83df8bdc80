//! Transient auto-dismissing notification

use std::time::{Duration, Instant};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_millis(3500);

/// A notification that disappears on its own; no interaction dismisses
/// it early and none is needed
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_not_expired() {
        let toast = Toast::new("Message sent");
        assert!(!toast.is_expired());
        assert_eq!(toast.text, "Message sent");
    }

    #[test]
    fn test_backdated_toast_expires() {
        let toast = Toast {
            text: "old".to_string(),
            shown_at: Instant::now() - TOAST_DURATION,
        };
        assert!(toast.is_expired());
    }
}
