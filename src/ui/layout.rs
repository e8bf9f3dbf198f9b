//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{FormSlot, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Brand shown in the header and splash
pub const BRAND_NAME: &str = "Federal Associados";

const INTRO_TEXT: &str = "Antes de transferirmos você para o nosso atendente, \
                          poderia responder essas perguntinhas rápidas?";

/// Widest the form gets on large terminals
const MAX_CONTENT_WIDTH: u16 = 90;

/// Split the screen into header, form and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (
        centered_column(rows[0]),
        centered_column(rows[1]),
        rows[2],
    )
}

/// Horizontally center a column of at most [`MAX_CONTENT_WIDTH`]
fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the brand header with the intro sentence
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("📶 ", Style::default().fg(Color::Blue)),
            Span::styled(
                BRAND_NAME,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(INTRO_TEXT, Style::default().fg(Color::Gray))),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^Q:sair ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused part of the form
fn get_view_hints(app: &App) -> String {
    use crate::platform::SUBMIT_SHORTCUT;

    if matches!(app.state.current_view, View::Splash) {
        return "Pressione qualquer tecla".to_string();
    }

    let form = &app.state.form;
    if form.state_picker.is_open {
        return "↑/↓:navegar  letra:pular  Enter:escolher  Esc:fechar".to_string();
    }

    match form.active_slot() {
        FormSlot::Field(field) if field.is_text() => {
            format!("Tab:próximo  ^U:limpar  {SUBMIT_SHORTCUT}:enviar")
        }
        FormSlot::Field(crate::state::FieldId::State) => {
            format!("Enter:abrir lista  Tab:próximo  {SUBMIT_SHORTCUT}:enviar")
        }
        FormSlot::Field(_) => {
            format!("↑/↓:navegar  1-5/Espaço:escolher  Tab:próximo  {SUBMIT_SHORTCUT}:enviar")
        }
        FormSlot::SubmitButton => format!(
            "Enter:enviar  {}:copiar link  Shift+Tab:voltar",
            crate::platform::COPY_LINK_SHORTCUT
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_header_and_status() {
        let (header, form, status) = create_layout(Rect::new(0, 0, 80, 40));
        assert_eq!(header.height, 3);
        assert_eq!(status, Rect::new(0, 39, 80, 1));
        assert_eq!(form.y, 3);
        assert_eq!(form.height, 36);
    }

    #[test]
    fn test_wide_terminal_centers_content() {
        let (_, form, status) = create_layout(Rect::new(0, 0, 200, 40));
        assert_eq!(form.width, MAX_CONTENT_WIDTH);
        assert_eq!(form.x, (200 - MAX_CONTENT_WIDTH) / 2);
        assert_eq!(status.width, 200);
    }
}
