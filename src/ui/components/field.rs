//! Contact form field rendering
//!
//! A field's border tells its annotation state: cyan while focused,
//! green once validated, red with the error message inline when invalid,
//! dark gray before any validation pass.

use crate::state::{ContactField, FieldStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one form field with its validation annotation
pub fn draw_field(frame: &mut Frame, area: Rect, field: &ContactField, is_active: bool) {
    let border_color = if is_active {
        Color::Cyan
    } else {
        match &field.status {
            FieldStatus::Pristine => Color::DarkGray,
            FieldStatus::Valid => Color::Green,
            FieldStatus::Invalid(_) => Color::Red,
        }
    };

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.clone(), text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    // Title carries the error message when invalid, so the annotation is
    // visible without extra rows
    let title = match field.status.message() {
        Some(msg) => format!(" {} — {} ", field.label, msg),
        None => format!(" {} ", field.label),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(border_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
