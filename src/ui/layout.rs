//! Layout components (navbar, status bar)

use crate::app::App;
use crate::platform;
use crate::state::{Focus, Section, NAVBAR_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into navbar, page viewport and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT), // Navbar
            Constraint::Min(0),                // Page viewport
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Horizontal placement of the nav items: (section, x, width)
pub fn navbar_items(width: u16) -> Vec<(Section, u16, u16)> {
    let mut items = Vec::with_capacity(Section::ALL.len());
    let mut x = 2u16;
    for section in Section::ALL {
        // " 1 Home " — hotkey, space, label, padded
        let w = section.label().len() as u16 + 4;
        if x + w > width {
            break;
        }
        items.push((section, x, w));
        x += w + 1;
    }
    items
}

/// Map a click column on the navbar row to its section
pub fn navbar_hit(column: u16, width: u16) -> Option<Section> {
    navbar_items(width)
        .into_iter()
        .find(|(_, x, w)| column >= *x && column < x + w)
        .map(|(section, _, _)| section)
}

/// Draw the navbar: active item highlighted from the scroll position,
/// whole bar restyled once the page has scrolled past the threshold
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let scrolled = app.state.scroll.is_scrolled();
    let active = app.state.active_section();

    let border_style = if scrolled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", app.content.profile.name))
        .title_style(if scrolled {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        });
    frame.render_widget(block, area);

    let row = area.y + 1;
    for (section, x, w) in navbar_items(area.width) {
        let is_active = section == active;
        let style = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text = format!(" {} {} ", section.hotkey(), section.label());
        let item_area = Rect {
            x: area.x + x,
            y: row,
            width: w.min(area.width.saturating_sub(x)),
            height: 1,
        };
        frame.render_widget(Paragraph::new(text).style(style), item_area);
    }
}

/// Draw the status bar with per-focus key hints and transient feedback
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.active_section().label()),
        Style::default().fg(Color::Cyan),
    )];

    spans.push(Span::styled(
        get_focus_hints(app.state.focus),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(toast) = &app.state.toast {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            toast.text.clone(),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " q:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint)
        .style(Style::default().bg(Color::Black).fg(Color::DarkGray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current focus context
fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Page => "j/k:scroll  1-5:jump  Enter:contact  y:copy email  ?:help".to_string(),
        Focus::ContactForm => format!(
            "Tab:next field  {}:send  Esc:back to page",
            platform::SUBMIT_SHORTCUT
        ),
        Focus::Dialog => "Tab:cycle  Enter:activate  Esc:close".to_string(),
    }
}
