//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Pressione "),
        Span::styled("Enter", key_style),
        Span::raw(" ou "),
        Span::styled("Esc", key_style),
        Span::raw(" para fechar"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Erro",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 72,
        },
    );
}
