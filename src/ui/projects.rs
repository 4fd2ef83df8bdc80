//! Projects section: bordered cards with reveal and hover effects

use super::{element_rect, heading, wrap_text};
use crate::app::App;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, page_area: Rect, app: &App) {
    let state = &app.state;
    let scroll = state.scroll.offset;
    let (_, top, _) = state.page.sections()[Section::Projects as usize];

    if let Some((rect, skip)) = element_rect(page_area, scroll, top, 3) {
        let lines: Vec<Line> = vec![Line::from(""), heading("Projects", rect.width)]
            .into_iter()
            .skip(skip as usize)
            .collect();
        frame.render_widget(Paragraph::new(lines), rect);
    }

    for (i, project) in app.content.projects.iter().enumerate() {
        let Some(&(card_top, card_height)) = state.page.cards.get(i) else {
            continue;
        };
        let progress = state.reveal.progress(i);
        if progress == 0.0 {
            continue;
        }

        let hovered = state.hovered_card == Some(i);
        // Hovered cards lift one row, like the web page's translateY
        let mut top = card_top + state.reveal.offset_rows(i);
        if hovered {
            top = top.saturating_sub(1);
        }

        let Some((rect, skip)) = element_rect(page_area, scroll, top, card_height)
        else {
            continue;
        };
        // A bordered block cannot render with its top edge clipped
        if skip > 0 || rect.height < 2 {
            continue;
        }

        let card_rect = Rect {
            x: rect.x + 2,
            width: rect.width.saturating_sub(4),
            ..rect
        };

        let entering = progress < 1.0;
        let border_style = if hovered {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if entering {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text_style = if entering {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_width = card_rect.width.saturating_sub(4) as usize;
        let mut lines: Vec<Line> = wrap_text(&project.description, text_width)
            .into_iter()
            .take(2)
            .map(|l| Line::from(Span::styled(format!(" {l}"), text_style)))
            .collect();

        let tech = project.tech.join(" · ");
        lines.push(Line::from(Span::styled(
            format!(" {tech}"),
            Style::default().fg(Color::Magenta),
        )));
        if let Some(link) = &project.link {
            lines.push(Line::from(Span::styled(
                format!(" {link}"),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }

        let block = Block::default()
            .title(format!(" {} ", project.title))
            .title_style(border_style.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), card_rect);
    }
}
