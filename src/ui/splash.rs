//! Splash screen rendering with the brand banner

use super::layout::BRAND_NAME;
use crate::state::SplashState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the banner lines
fn build_banner() -> Vec<Line<'static>> {
    let signal = Style::default().fg(Color::Blue);
    vec![
        Line::from(Span::styled("  .-~~~-.  ", signal)),
        Line::from(Span::styled(" /  .-.  \\ ", signal)),
        Line::from(Span::styled("   /   \\   ", signal)),
        Line::from(Span::styled("     ●     ", signal)),
        Line::from(""),
        Line::from(Span::styled(
            BRAND_NAME,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_banner();
    let banner_height = lines.len() as u16;

    // Center position shifted by the scroll offset (may go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(banner_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let banner_area = Rect {
        x: area.x,
        y: render_y,
        width: area.width,
        height: visible_height.min((area.y + area.height).saturating_sub(render_y)),
    };

    frame.render_widget(
        Paragraph::new(visible_lines).alignment(Alignment::Center),
        banner_area,
    );

    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = Line::from(Span::styled(
            "Pressione qualquer tecla para continuar",
            Style::default().fg(Color::DarkGray),
        ));
        let hint_area = Rect {
            x: area.x,
            y: area.y + area.height - 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
    }
}
