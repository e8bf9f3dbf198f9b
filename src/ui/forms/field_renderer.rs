//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Visual state shared by every field box
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldLook {
    pub is_active: bool,
    /// Inline error shown in the bottom border while the field is flagged
    pub error: Option<&'static str>,
}

impl FieldLook {
    /// Border color: red while flagged, cyan while focused
    pub fn border_color(self) -> Color {
        if self.error.is_some() {
            Color::Red
        } else if self.is_active {
            Color::Cyan
        } else {
            Color::DarkGray
        }
    }
}

/// Bordered box with the question on top and the error, if any, below
pub fn field_block(title: &str, look: FieldLook) -> Block<'static> {
    let title_style = if look.is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut block = Block::default()
        .title(Span::styled(format!(" {title} "), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(look.border_color()));

    if let Some(error) = look.error {
        block = block.title_bottom(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        ));
    }

    block
}

/// Draw a single-line input box.
///
/// Empty values show `placeholder` in gray; the focused field gets a cursor.
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    look: FieldLook,
    suffix: Option<&str>,
) {
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::styled(value.to_string(), Style::default().fg(Color::White))]
    };

    if look.is_active && suffix.is_none() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    if let Some(suffix) = suffix {
        spans.push(Span::styled(
            format!(" {suffix}"),
            Style::default().fg(Color::Gray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block(title, look)),
        area,
    );
}
