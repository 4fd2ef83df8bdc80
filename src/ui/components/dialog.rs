//! Overlay dialogs
//!
//! Dialogs clear the area behind them and trap focus: Tab cycles only
//! through the dialog's own buttons and Esc closes. When one opens,
//! focus lands on its first interactive element.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Buttons of the help dialog, in focus order
pub const HELP_DIALOG_BUTTONS: &[&str] = &["Close"];

struct DialogConfig<'a> {
    title: &'a str,
    accent: Color,
    lines: Vec<Line<'a>>,
    buttons: &'a [&'a str],
    focused_button: usize,
    max_width: u16,
}

fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();

    let content_width = config
        .lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .max(config.title.len()) as u16;
    let width = (content_width + 6).min(config.max_width).min(area.width);
    // borders + title row + blank + content + blank + buttons
    let height = (config.lines.len() as u16 + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.lines);
    content.push(Line::from(""));

    // Button row: focused button highlighted, focus cycles here only
    let mut button_spans = Vec::new();
    for (i, label) in config.buttons.iter().enumerate() {
        if i > 0 {
            button_spans.push(Span::raw("  "));
        }
        let style = if i == config.focused_button {
            Style::default()
                .fg(Color::Black)
                .bg(config.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(config.accent)
        };
        button_spans.push(Span::styled(format!("[ {label} ]"), style));
    }
    content.push(Line::from(button_spans));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Render the help overlay with its key reference
pub fn render_help_dialog(frame: &mut Frame, focused_button: usize) {
    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![Span::raw("j/k, wheel    "), Span::styled("scroll", dim)]),
        Line::from(vec![Span::raw("1-5           "), Span::styled("jump to section", dim)]),
        Line::from(vec![Span::raw("Enter/Tab     "), Span::styled("focus the contact form", dim)]),
        Line::from(vec![Span::raw("Ctrl+S        "), Span::styled("send the message", dim)]),
        Line::from(vec![Span::raw("y             "), Span::styled("copy the contact email", dim)]),
        Line::from(vec![Span::raw("Esc           "), Span::styled("close / leave the form", dim)]),
        Line::from(vec![Span::raw("q             "), Span::styled("quit", dim)]),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Keys",
            accent: Color::Cyan,
            lines,
            buttons: HELP_DIALOG_BUTTONS,
            focused_button,
            max_width: 50,
        },
    );
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let lines = vec![Line::from(error_message.to_string())];

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            lines,
            buttons: &["Dismiss"],
            focused_button: 0,
            max_width: 60,
        },
    );
}
