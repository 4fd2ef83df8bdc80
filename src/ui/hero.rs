//! Hero section: portrait, typed title, parallax particle backdrop

use super::element_rect;
use crate::app::App;
use crate::content::HERO_PORTRAIT;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sparse star pattern for the particle layer
fn particle_at(row: i32, col: u16) -> bool {
    let h = row.wrapping_mul(7349) ^ i32::from(col).wrapping_mul(911);
    (h & 0x7fff_ffff) % 53 == 0
}

/// Even sparser pattern for the overlay layer
fn overlay_at(row: i32, col: u16) -> bool {
    let h = row.wrapping_mul(2663) ^ i32::from(col).wrapping_mul(337);
    (h & 0x7fff_ffff) % 89 == 0
}

/// A backdrop line whose two decorative layers shift at their own
/// parallax rates
fn backdrop_line(row: u16, width: u16, particles_shift: i32, overlay_shift: i32) -> Line<'static> {
    let mut text = String::with_capacity(width as usize);
    for col in 0..width {
        let p_row = i32::from(row) - particles_shift;
        let o_row = i32::from(row) - overlay_shift;
        if particle_at(p_row, col) {
            text.push('·');
        } else if overlay_at(o_row, col) {
            text.push('+');
        } else {
            text.push(' ');
        }
    }
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

pub fn draw(frame: &mut Frame, page_area: Rect, app: &App) {
    let state = &app.state;
    let (_, top, height) = state.page.sections()[Section::Home as usize];
    let Some((rect, skip)) = element_rect(page_area, state.scroll.offset, top, height) else {
        return;
    };

    let width = rect.width;
    let particles_shift = state.scroll.parallax_particles();
    let overlay_shift = state.scroll.parallax_overlay();

    // Content rows within the hero, everything else is backdrop
    let mut lines: Vec<Line> = (0..height)
        .map(|row| backdrop_line(row, width, particles_shift, overlay_shift))
        .collect();

    let center = |text: &str| -> String {
        let pad = (width as usize).saturating_sub(text.chars().count()) / 2;
        format!("{}{}", " ".repeat(pad), text)
    };

    let mut row = 1usize;
    for art in HERO_PORTRAIT {
        if row >= lines.len() {
            break;
        }
        lines[row] = Line::from(Span::styled(
            center(art),
            Style::default().fg(Color::Yellow),
        ));
        row += 1;
    }
    row += 1;

    // Typed title: cursor sits on whichever line is still revealing
    let (line1, line2) = state.typing.visible();
    let typing_done = state.typing.is_complete();
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let line1_text = if !typing_done && line2.is_empty() {
        format!("{line1}▌")
    } else {
        line1
    };
    let line2_text = if !typing_done && !line2.is_empty() {
        format!("{line2}▌")
    } else {
        line2
    };

    if row < lines.len() {
        lines[row] = Line::from(Span::styled(center(&line1_text), title_style));
        row += 1;
    }
    if row < lines.len() {
        lines[row] = Line::from(Span::styled(center(&line2_text), title_style));
        row += 2;
    }

    if row < lines.len() {
        lines[row] = Line::from(Span::styled(
            center(&app.content.profile.tagline),
            Style::default().fg(Color::Gray),
        ));
        row += 2;
    }

    if row < lines.len() {
        let social = format!(
            "{}  ·  {}  ·  {}",
            app.content.profile.location, app.content.profile.email, app.content.profile.github
        );
        lines[row] = Line::from(Span::styled(
            center(&social),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(last) = lines.last_mut() {
        *last = Line::from(Span::styled(
            center("▼  j/k to scroll"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let visible: Vec<Line> = lines.into_iter().skip(skip as usize).collect();
    frame.render_widget(Paragraph::new(visible), rect);
}
