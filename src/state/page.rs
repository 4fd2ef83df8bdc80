//! Page geometry and scroll state
//!
//! The portfolio renders as one tall page of stacked sections; a float
//! scroll offset selects the viewport. `PageMap` holds the computed row
//! geometry, `ScrollState` owns the offset and the smooth-scroll
//! animation.

use crate::content::{Portfolio, HERO_PORTRAIT};
use std::time::{Duration, Instant};

/// Height of the top navigation bar (borders included)
pub const NAVBAR_HEIGHT: u16 = 3;

/// Offset past which the navbar switches to its "scrolled" style
pub const SCROLLED_THRESHOLD: f32 = 3.0;

/// Look-ahead margin for active-section tracking, in rows
const ACTIVE_MARGIN: u16 = 2;

/// Rows of one project card (borders + title + description + tech line)
pub const CARD_HEIGHT: u16 = 6;

/// Rows of one contact info row
pub const CONTACT_ROW_HEIGHT: u16 = 1;

/// In-page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Digit key that jumps to this section
    pub fn hotkey(&self) -> char {
        match self {
            Section::Home => '1',
            Section::About => '2',
            Section::Projects => '3',
            Section::Experience => '4',
            Section::Contact => '5',
        }
    }
}

/// Row geometry of the whole page, rebuilt on resize
#[derive(Debug, Clone)]
pub struct PageMap {
    /// (section, top row, height) in page coordinates
    sections: Vec<(Section, u16, u16)>,
    /// Absolute (top, height) of each project card
    pub cards: Vec<(u16, u16)>,
    /// Absolute (top, height) of each timeline entry
    pub timeline: Vec<(u16, u16)>,
    /// Absolute (top, height) of each contact info row
    pub contact_rows: Vec<(u16, u16)>,
    /// Absolute top row of the contact form block
    pub form_top: u16,
    pub total_height: u16,
}

impl PageMap {
    /// Heights of the contact form rows relative to `form_top`:
    /// name (3) + email (3) + message (6) + send button (3) + hint (1)
    pub const FORM_FIELD_HEIGHTS: [u16; 3] = [3, 3, 6];
    pub const FORM_HEIGHT: u16 = 3 + 3 + 6 + 3 + 1;

    pub fn build(content: &Portfolio, viewport: (u16, u16)) -> Self {
        let (_width, height) = viewport;
        let mut sections = Vec::with_capacity(Section::ALL.len());
        let mut top: u16 = 0;

        // Hero fills the first screen below the navbar, like the web
        // page's full-height hero
        let hero_height = height
            .saturating_sub(NAVBAR_HEIGHT + 1)
            .max(HERO_PORTRAIT.len() as u16 + 8);
        sections.push((Section::Home, top, hero_height));
        top += hero_height;

        // Heading + up to three wrapped lines and a blank per paragraph
        let about_height = 3 + content.profile.summary.len() as u16 * 4 + 2;
        sections.push((Section::About, top, about_height));
        top += about_height;

        let mut cards = Vec::with_capacity(content.projects.len());
        let projects_height = 3 + content.projects.len() as u16 * (CARD_HEIGHT + 1);
        let mut card_top = top + 3;
        for _ in &content.projects {
            cards.push((card_top, CARD_HEIGHT));
            card_top += CARD_HEIGHT + 1;
        }
        sections.push((Section::Projects, top, projects_height));
        top += projects_height;

        let mut timeline = Vec::with_capacity(content.experience.len());
        let mut entry_top = top + 3;
        let mut experience_height: u16 = 3;
        for entry in &content.experience {
            let h = 2 + entry.highlights.len() as u16 + 1;
            timeline.push((entry_top, h));
            entry_top += h;
            experience_height += h;
        }
        sections.push((Section::Experience, top, experience_height));
        top += experience_height;

        // Contact: heading + three info rows + form
        let mut contact_rows = Vec::with_capacity(3);
        for i in 0..3u16 {
            contact_rows.push((top + 3 + i * CONTACT_ROW_HEIGHT, CONTACT_ROW_HEIGHT));
        }
        let form_top = top + 3 + 3 * CONTACT_ROW_HEIGHT + 1;
        let contact_height = 3 + 3 * CONTACT_ROW_HEIGHT + 1 + Self::FORM_HEIGHT + 2;
        sections.push((Section::Contact, top, contact_height));
        top += contact_height;

        Self {
            sections,
            cards,
            timeline,
            contact_rows,
            form_top,
            total_height: top,
        }
    }

    pub fn sections(&self) -> &[(Section, u16, u16)] {
        &self.sections
    }

    pub fn top_of(&self, section: Section) -> u16 {
        self.sections
            .iter()
            .find(|(s, _, _)| *s == section)
            .map(|(_, top, _)| *top)
            .unwrap_or(0)
    }

    /// Section the scroll position currently sits in, with the same
    /// look-ahead rule as the web page (section top minus navbar height
    /// minus a margin)
    pub fn active_section(&self, scroll: f32) -> Section {
        let pos = scroll.max(0.0) as u16;
        let mut active = Section::Home;
        for (section, top, _) in &self.sections {
            let trigger = top.saturating_sub(NAVBAR_HEIGHT + ACTIVE_MARGIN);
            if pos >= trigger {
                active = *section;
            }
        }
        active
    }

    /// All reveal-animated items in page order: cards, then timeline
    /// entries, then contact rows
    pub fn reveal_items(&self) -> Vec<(u16, u16)> {
        let mut items = self.cards.clone();
        items.extend_from_slice(&self.timeline);
        items.extend_from_slice(&self.contact_rows);
        items
    }

    /// Largest useful scroll offset for a given viewport height
    pub fn max_scroll(&self, viewport_height: u16) -> f32 {
        let visible = viewport_height.saturating_sub(NAVBAR_HEIGHT + 1);
        f32::from(self.total_height.saturating_sub(visible))
    }
}

/// Smooth-scroll animation duration
const SCROLL_ANIM_DURATION: Duration = Duration::from_millis(800);

#[derive(Debug)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

/// Scroll offset plus the in-flight smooth-scroll animation, if any
#[derive(Debug, Default)]
pub struct ScrollState {
    pub offset: f32,
    anim: Option<ScrollAnimation>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Manual scroll; cancels any smooth-scroll in flight
    pub fn scroll_by(&mut self, delta: f32, max: f32) {
        self.anim = None;
        self.offset = (self.offset + delta).clamp(0.0, max.max(0.0));
    }

    /// Start a smooth scroll from the current offset to `target`
    pub fn animate_to(&mut self, target: f32) {
        if (target - self.offset).abs() < f32::EPSILON {
            return;
        }
        self.anim = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            started: Instant::now(),
        });
    }

    /// Advance the animation; call once per tick
    pub fn update(&mut self) {
        if let Some(anim) = &self.anim {
            let elapsed = anim.started.elapsed();
            if elapsed >= SCROLL_ANIM_DURATION {
                self.offset = anim.to;
                self.anim = None;
            } else {
                let progress = elapsed.as_secs_f32() / SCROLL_ANIM_DURATION.as_secs_f32();
                let eased = simple_easing::cubic_out(progress);
                self.offset = anim.from + (anim.to - anim.from) * eased;
            }
        }
    }

    /// Whether the page has scrolled past the navbar-style threshold
    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    /// Vertical shift of the hero particle layer (−0.5× the page rate)
    pub fn parallax_particles(&self) -> i32 {
        (self.offset * -0.5) as i32
    }

    /// Vertical shift of the hero overlay layer (−0.3× the page rate)
    pub fn parallax_overlay(&self) -> i32 {
        (self.offset * -0.3) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map() -> PageMap {
        PageMap::build(&Portfolio::builtin(), (80, 24))
    }

    mod section {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_labels_and_hotkeys_cover_all() {
            for (i, section) in Section::ALL.iter().enumerate() {
                assert!(!section.label().is_empty());
                assert_eq!(section.hotkey(), char::from_digit(i as u32 + 1, 10).unwrap());
            }
        }
    }

    mod page_map {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_sections_are_contiguous() {
            let map = map();
            let mut expected_top = 0u16;
            for (_, top, height) in map.sections() {
                assert_eq!(*top, expected_top);
                expected_top += height;
            }
            assert_eq!(map.total_height, expected_top);
        }

        #[test]
        fn test_home_starts_at_zero() {
            assert_eq!(map().top_of(Section::Home), 0);
        }

        #[test]
        fn test_active_section_at_top_is_home() {
            assert_eq!(map().active_section(0.0), Section::Home);
        }

        #[test]
        fn test_active_section_at_bottom_is_contact() {
            let map = map();
            assert_eq!(
                map.active_section(f32::from(map.total_height)),
                Section::Contact
            );
        }

        #[test]
        fn test_active_section_triggers_slightly_early() {
            // A position just above a section top (within the navbar +
            // margin window) already counts as that section
            let map = map();
            let about_top = map.top_of(Section::About);
            let pos = f32::from(about_top.saturating_sub(NAVBAR_HEIGHT));
            assert_eq!(map.active_section(pos), Section::About);
        }

        #[test]
        fn test_reveal_items_ordered_by_page_position() {
            let map = map();
            let items = map.reveal_items();
            let content = Portfolio::builtin();
            assert_eq!(
                items.len(),
                content.projects.len() + content.experience.len() + 3
            );
            for pair in items.windows(2) {
                assert!(pair[0].0 <= pair[1].0);
            }
        }

        #[test]
        fn test_cards_sit_inside_projects_section() {
            let map = map();
            let projects_top = map.top_of(Section::Projects);
            let experience_top = map.top_of(Section::Experience);
            for (top, height) in &map.cards {
                assert!(*top >= projects_top);
                assert!(top + height <= experience_top);
            }
        }

        #[test]
        fn test_form_sits_inside_contact_section() {
            let map = map();
            assert!(map.form_top >= map.top_of(Section::Contact));
            assert!(map.form_top + PageMap::FORM_HEIGHT <= map.total_height);
        }

        #[test]
        fn test_max_scroll_is_positive_for_small_viewport() {
            let map = map();
            assert!(map.max_scroll(24) > 0.0);
            // A viewport taller than the page needs no scrolling
            assert_eq!(map.max_scroll(map.total_height + NAVBAR_HEIGHT + 1), 0.0);
        }
    }

    mod scroll_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_at_top_and_idle() {
            let scroll = ScrollState::new();
            assert_eq!(scroll.offset, 0.0);
            assert!(!scroll.is_animating());
            assert!(!scroll.is_scrolled());
        }

        #[test]
        fn test_scroll_by_clamps_to_bounds() {
            let mut scroll = ScrollState::new();
            scroll.scroll_by(-5.0, 100.0);
            assert_eq!(scroll.offset, 0.0);
            scroll.scroll_by(500.0, 100.0);
            assert_eq!(scroll.offset, 100.0);
        }

        #[test]
        fn test_scroll_by_cancels_animation() {
            let mut scroll = ScrollState::new();
            scroll.animate_to(50.0);
            assert!(scroll.is_animating());
            scroll.scroll_by(1.0, 100.0);
            assert!(!scroll.is_animating());
        }

        #[test]
        fn test_animate_to_current_offset_is_noop() {
            let mut scroll = ScrollState::new();
            scroll.animate_to(0.0);
            assert!(!scroll.is_animating());
        }

        #[test]
        fn test_scrolled_threshold() {
            let mut scroll = ScrollState::new();
            scroll.scroll_by(SCROLLED_THRESHOLD, 100.0);
            assert!(!scroll.is_scrolled());
            scroll.scroll_by(0.5, 100.0);
            assert!(scroll.is_scrolled());
        }

        #[test]
        fn test_parallax_rates() {
            let mut scroll = ScrollState::new();
            scroll.scroll_by(20.0, 100.0);
            assert_eq!(scroll.parallax_particles(), -10);
            assert_eq!(scroll.parallax_overlay(), -6);
        }

        // Note: the time-based easing path is exercised indirectly; as
        // with the splash-style animations, the endpoints are what we
        // assert (update() with no animation leaves the offset alone).
        #[test]
        fn test_update_without_animation_is_noop() {
            let mut scroll = ScrollState::new();
            scroll.scroll_by(10.0, 100.0);
            scroll.update();
            assert_eq!(scroll.offset, 10.0);
        }
    }
}
