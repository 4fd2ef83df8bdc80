//! About section

use super::{element_rect, heading, wrap_text};
use crate::app::App;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, page_area: Rect, app: &App) {
    let state = &app.state;
    let (_, top, height) = state.page.sections()[Section::About as usize];
    let Some((rect, skip)) = element_rect(page_area, state.scroll.offset, top, height) else {
        return;
    };

    let text_width = rect.width.saturating_sub(8) as usize;
    let mut lines: Vec<Line> = vec![
        Line::from(""),
        heading("About", rect.width),
        Line::from(""),
    ];

    for paragraph in &app.content.profile.summary {
        // Each paragraph gets up to three wrapped lines plus a blank,
        // matching the rows PageMap reserves for it
        let wrapped = wrap_text(paragraph, text_width);
        for line in wrapped.into_iter().take(3) {
            lines.push(Line::from(Span::styled(
                format!("    {line}"),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }

    let visible: Vec<Line> = lines.into_iter().skip(skip as usize).collect();
    frame.render_widget(Paragraph::new(visible), rect);
}
