//! UI module for rendering the TUI

mod about;
pub mod components;
mod contact;
mod experience;
mod hero;
pub mod layout;
mod projects;

use crate::app::App;
use crate::state::{Focus, Section};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (nav_area, page_area, status_area) = layout::create_layout(area);

    layout::draw_navbar(frame, nav_area, app);

    // Draw whichever sections intersect the viewport
    for (section, _, _) in app.state.page.sections().to_vec() {
        match section {
            Section::Home => hero::draw(frame, page_area, app),
            Section::About => about::draw(frame, page_area, app),
            Section::Projects => projects::draw(frame, page_area, app),
            Section::Experience => experience::draw(frame, page_area, app),
            Section::Contact => contact::draw(frame, page_area, app),
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    draw_toast(frame, page_area, app);

    // Overlays last so they sit on top
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    } else if app.state.focus == Focus::Dialog {
        components::render_help_dialog(frame, app.state.dialog_focus);
    }
}

/// Transient success notification, pinned below the navbar on the right
fn draw_toast(frame: &mut Frame, page_area: Rect, app: &App) {
    let Some(toast) = &app.state.toast else {
        return;
    };

    let width = (toast.text.len() as u16 + 6).min(page_area.width);
    let toast_area = Rect {
        x: page_area.x + page_area.width.saturating_sub(width + 1),
        y: page_area.y,
        width,
        height: 3.min(page_area.height),
    };

    frame.render_widget(Clear, toast_area);
    let body = Paragraph::new(Line::from(vec![
        Span::styled("✓ ", Style::default().fg(Color::Green)),
        Span::raw(toast.text.clone()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(body, toast_area);
}

/// On-screen rect for a page element at `top` with `height`, given the
/// current scroll. Returns the clipped rect plus how many of the
/// element's rows fell above the viewport.
pub(crate) fn element_rect(
    page_area: Rect,
    scroll: f32,
    top: u16,
    height: u16,
) -> Option<(Rect, u16)> {
    let scroll = scroll.round() as i32;
    let y = i32::from(page_area.y) + i32::from(top) - scroll;
    let bottom = y + i32::from(height);
    let area_top = i32::from(page_area.y);
    let area_bottom = area_top + i32::from(page_area.height);

    if bottom <= area_top || y >= area_bottom {
        return None;
    }

    let clipped_top = (area_top - y).max(0) as u16;
    let screen_y = y.max(area_top) as u16;
    let visible_height = (bottom.min(area_bottom) - i32::from(screen_y)) as u16;

    Some((
        Rect {
            x: page_area.x,
            y: screen_y,
            width: page_area.width,
            height: visible_height,
        },
        clipped_top,
    ))
}

/// Section heading line: "── Label ─────────"
pub(crate) fn heading(label: &str, width: u16) -> Line<'static> {
    let mut text = format!("── {label} ");
    let fill = (width as usize).saturating_sub(text.chars().count() + 2);
    text.extend(std::iter::repeat('─').take(fill));
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Wrap text to fit within a maximum width
pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > max_width
            {
                lines.push(current);
                current = String::new();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
