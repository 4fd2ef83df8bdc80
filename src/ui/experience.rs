//! Experience timeline section

use super::{element_rect, heading};
use crate::app::App;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, page_area: Rect, app: &App) {
    let state = &app.state;
    let scroll = state.scroll.offset;
    let (_, top, _) = state.page.sections()[Section::Experience as usize];

    if let Some((rect, skip)) = element_rect(page_area, scroll, top, 3) {
        let lines: Vec<Line> = vec![Line::from(""), heading("Experience", rect.width)]
            .into_iter()
            .skip(skip as usize)
            .collect();
        frame.render_widget(Paragraph::new(lines), rect);
    }

    // Timeline entries reveal one by one as they enter the viewport
    let card_count = state.page.cards.len();
    for (i, entry) in app.content.experience.iter().enumerate() {
        let Some(&(entry_top, entry_height)) = state.page.timeline.get(i) else {
            continue;
        };
        let reveal_idx = card_count + i;
        let progress = state.reveal.progress(reveal_idx);
        if progress == 0.0 {
            continue;
        }
        let offset = state.reveal.offset_rows(reveal_idx);

        let Some((rect, skip)) =
            element_rect(page_area, scroll, entry_top + offset, entry_height) else {
            continue;
        };

        let entering = progress < 1.0;
        let head_style = if entering {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let body_style = if entering {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut lines: Vec<Line> = vec![
            Line::from(vec![
                Span::styled("  ● ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{} — {}", entry.role, entry.organization),
                    head_style,
                ),
            ]),
            Line::from(Span::styled(
                format!("  │   {}", entry.period()),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        for highlight in &entry.highlights {
            lines.push(Line::from(Span::styled(
                format!("  │   · {highlight}"),
                body_style,
            )));
        }
        lines.push(Line::from(Span::styled(
            "  │",
            Style::default().fg(Color::DarkGray),
        )));

        let visible: Vec<Line> = lines.into_iter().skip(skip as usize).collect();
        frame.render_widget(Paragraph::new(visible), rect);
    }
}
