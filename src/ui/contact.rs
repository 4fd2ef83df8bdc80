//! Contact section: info rows and the contact form

use super::components::{draw_field, render_button, BUTTON_HEIGHT};
use super::{element_rect, heading};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Focus, PageMap, Section, CONTACT_ROW_HEIGHT, SEND_ROW};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, page_area: Rect, app: &App) {
    let state = &app.state;
    let scroll = state.scroll.offset;
    let (_, top, _) = state.page.sections()[Section::Contact as usize];

    if let Some((rect, skip)) = element_rect(page_area, scroll, top, 3) {
        let lines: Vec<Line> = vec![Line::from(""), heading("Contact", rect.width)]
            .into_iter()
            .skip(skip as usize)
            .collect();
        frame.render_widget(Paragraph::new(lines), rect);
    }

    draw_info_rows(frame, page_area, app);
    draw_form(frame, page_area, app);
}

fn draw_info_rows(frame: &mut Frame, page_area: Rect, app: &App) {
    let state = &app.state;
    let scroll = state.scroll.offset;
    let profile = &app.content.profile;
    let base_idx = state.page.cards.len() + state.page.timeline.len();

    let rows = [
        ("✉", profile.email.as_str()),
        ("⌨", profile.github.as_str()),
        ("⌂", profile.location.as_str()),
    ];

    for (i, (icon, value)) in rows.iter().enumerate() {
        let Some(&(row_top, _)) = state.page.contact_rows.get(i) else {
            continue;
        };
        let progress = state.reveal.progress(base_idx + i);
        if progress == 0.0 {
            continue;
        }
        let offset = state.reveal.offset_rows(base_idx + i);

        let Some((rect, skip)) =
            element_rect(page_area, scroll, row_top + offset, CONTACT_ROW_HEIGHT)
        else {
            continue;
        };
        if skip > 0 {
            continue;
        }

        let style = if progress < 1.0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let line = Line::from(vec![
            Span::styled(format!("    {icon}  "), Style::default().fg(Color::Cyan)),
            Span::styled((*value).to_string(), style),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

fn draw_form(frame: &mut Frame, page_area: Rect, app: &App) {
    let state = &app.state;
    let scroll = state.scroll.offset;
    let form = &state.contact_form;
    let editing = state.focus == Focus::ContactForm;
    let form_top = state.page.form_top;

    let mut field_top = form_top;
    for (i, height) in PageMap::FORM_FIELD_HEIGHTS.iter().enumerate() {
        if let Some((rect, skip)) = element_rect(page_area, scroll, field_top, *height) {
            // A bordered field cannot render with its top edge clipped
            if skip == 0 && rect.height >= 2 {
                let rect = Rect {
                    x: rect.x + 4,
                    width: rect.width.saturating_sub(8).min(60),
                    ..rect
                };
                if let Some(field) = form.field(i) {
                    draw_field(frame, rect, field, editing && form.active_field_index == i);
                }
            }
        }
        field_top += height;
    }

    // Send button below the fields
    if let Some((rect, skip)) = element_rect(page_area, scroll, field_top, BUTTON_HEIGHT) {
        if skip == 0 && rect.height >= 2 {
            let rect = Rect {
                x: rect.x + 4,
                width: 18.min(rect.width.saturating_sub(8)),
                ..rect
            };
            render_button(
                frame,
                rect,
                "Send Message",
                editing && form.active_field_index == SEND_ROW,
                state.submit_press.is_some(),
            );
        }
    }
    field_top += BUTTON_HEIGHT;

    if let Some((rect, skip)) = element_rect(page_area, scroll, field_top, 1) {
        if skip == 0 {
            let hint = if editing {
                format!("    Tab: next field · {SUBMIT_SHORTCUT}: send · Esc: back to page")
            } else {
                "    Enter: fill in the form".to_string()
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    hint,
                    Style::default().fg(Color::DarkGray),
                ))),
                rect,
            );
        }
    }
}
