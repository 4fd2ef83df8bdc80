//! Staggered entrance animations
//!
//! Project cards, timeline entries and contact rows start hidden and
//! animate in the first time they intersect the viewport, each item in a
//! batch delayed 100 ms after the previous one — the terminal rendition
//! of the page's IntersectionObserver + stagger effect.

use std::time::{Duration, Instant};

const STAGGER: Duration = Duration::from_millis(100);
const DURATION: Duration = Duration::from_millis(800);

/// Bottom margin: an item must clear this many rows above the viewport
/// bottom before it counts as intersecting (the -50px rootMargin analog)
pub const INTERSECT_MARGIN: u16 = 2;

/// Rows an item slides up while entering
const SLIDE_ROWS: f32 = 2.0;

#[derive(Debug)]
pub struct RevealState {
    /// None = still hidden; Some(start) = reveal begins at `start`
    /// (stagger already folded in)
    items: Vec<Option<Instant>>,
}

impl RevealState {
    pub fn new(count: usize) -> Self {
        Self {
            items: vec![None; count],
        }
    }

    /// Start with every item settled (reduced motion)
    pub fn settled(count: usize) -> Self {
        let past = Instant::now() - DURATION;
        Self {
            items: vec![Some(past); count],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mark the given items as intersecting the viewport. Items already
    /// revealed keep their start time; newly visible ones are staggered
    /// within this batch.
    pub fn observe_visible(&mut self, visible: &[usize]) {
        let now = Instant::now();
        let mut batch_index = 0u32;
        for &idx in visible {
            if let Some(slot) = self.items.get_mut(idx) {
                if slot.is_none() {
                    *slot = Some(now + STAGGER * batch_index);
                    batch_index += 1;
                }
            }
        }
    }

    /// Entrance progress: 0.0 hidden, eased 0..1 while entering, 1.0 done
    pub fn progress(&self, idx: usize) -> f32 {
        match self.items.get(idx).copied().flatten() {
            None => 0.0,
            Some(start) => {
                let now = Instant::now();
                if now < start {
                    return 0.0;
                }
                let elapsed = now - start;
                if elapsed >= DURATION {
                    1.0
                } else {
                    simple_easing::cubic_out(elapsed.as_secs_f32() / DURATION.as_secs_f32())
                }
            }
        }
    }

    /// Downward offset in rows while the item slides in
    pub fn offset_rows(&self, idx: usize) -> u16 {
        ((1.0 - self.progress(idx)) * SLIDE_ROWS).round() as u16
    }

    /// True while any revealed item is still entering
    pub fn is_animating(&self) -> bool {
        self.items
            .iter()
            .enumerate()
            .any(|(i, slot)| slot.is_some() && self.progress(i) < 1.0)
    }
}
