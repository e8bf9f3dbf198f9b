//! Multiple-choice list for the internet usage question

use super::field_renderer::{field_block, FieldLook};
use crate::state::catalog::USAGE_CATEGORIES;
use crate::state::IntakeForm;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem},
    Frame,
};

/// Rows each option takes when its description is shown
const ROWS_WITH_DESCRIPTION: u16 = 2;

/// Whether the box is tall enough to show every option with its description
fn shows_descriptions(area: Rect) -> bool {
    area.height.saturating_sub(2) >= USAGE_CATEGORIES.len() as u16 * ROWS_WITH_DESCRIPTION
}

/// Draw the usage options as radio buttons.
///
/// Descriptions are dropped on short terminals; the list scrolls so the
/// highlighted option is always on screen.
pub fn draw(frame: &mut Frame, area: Rect, title: &str, form: &IntakeForm, look: FieldLook) {
    let selected = form.answers().usage_category.as_str();
    let with_description = shows_descriptions(area);

    let items: Vec<ListItem> = USAGE_CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, category)| {
            let is_selected = category.code == selected;
            let marker = if is_selected { "(●)" } else { "( )" };
            let label_style = if is_selected {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{marker} {}. ", idx + 1), label_style),
                Span::styled(category.label, label_style),
            ])];
            if with_description {
                lines.push(Line::from(Span::styled(
                    format!("       {}", category.description),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    let highlight = if look.is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(field_block(title, look))
        .highlight_style(highlight);

    render_scrollable_list(frame, area, list, form.usage_cursor);
}
