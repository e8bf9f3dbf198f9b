//! State dropdown overlay

use crate::state::catalog::BRAZILIAN_STATES;
use crate::state::IntakeForm;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Rows shown at once when the dropdown is open
const MAX_VISIBLE_ROWS: u16 = 10;

/// Area of the dropdown, just below the field it belongs to
pub fn dropdown_area(field_area: Rect, screen: Rect) -> Rect {
    let y = field_area.y + field_area.height;
    let available = (screen.y + screen.height).saturating_sub(y);
    Rect {
        x: field_area.x,
        y,
        width: field_area.width,
        height: (MAX_VISIBLE_ROWS + 2).min(available),
    }
}

/// Draw the open dropdown over whatever is below the state field
pub fn draw(frame: &mut Frame, field_area: Rect, form: &IntakeForm) {
    let area = dropdown_area(field_area, frame.area());
    if area.height < 3 {
        return;
    }

    let chosen = form.answers().state.as_str();
    let items: Vec<ListItem> = BRAZILIAN_STATES
        .iter()
        .map(|state| {
            let style = if *state == chosen {
                Style::default().fg(Color::Blue)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(*state).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    frame.render_widget(Clear, area);
    render_scrollable_list(frame, area, list, form.state_picker.highlighted);
}
