//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod splash;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash)) = (&app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash);
        return;
    }

    let (header_area, form_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    forms::draw_intake(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{FieldId, Form};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let config = TuiConfig {
            skip_splash: Some(true),
            ..Default::default()
        };
        App::new(config)
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_questions_and_button() {
        let app = test_app();
        let screen = render(&app, 100, 45);
        assert!(screen.contains("Federal Associados"));
        assert!(screen.contains("Qual é o seu nome?"));
        assert!(screen.contains("Em qual estado você mora?"));
        assert!(screen.contains("Uso para trabalho"));
        assert!(screen.contains("FALAR COM ATENDENTE"));
        assert!(!screen.contains("Este campo é obrigatório"));
    }

    #[test]
    fn test_renders_inline_errors_after_failed_validation() {
        let mut app = test_app();
        app.state.form.revalidate();
        let screen = render(&app, 100, 45);
        assert!(screen.contains("Este campo é obrigatório"));
        assert!(screen.contains("Selecione uma opção"));
    }

    #[test]
    fn test_renders_entered_values() {
        let mut app = test_app();
        app.state.form.set_field(FieldId::Name, "Ana");
        app.state.form.set_field(FieldId::State, "Sergipe");
        let screen = render(&app, 100, 45);
        assert!(screen.contains("Ana"));
        assert!(screen.contains("Sergipe"));
    }

    #[test]
    fn test_renders_open_dropdown() {
        let mut app = test_app();
        app.state.form.set_active_field(2);
        app.state.form.open_state_picker();
        let screen = render(&app, 100, 45);
        assert!(screen.contains("Acre"));
        assert!(screen.contains("Alagoas"));
    }

    #[test]
    fn test_renders_error_dialog() {
        let mut app = test_app();
        app.push_error("Não foi possível abrir o WhatsApp.");
        let screen = render(&app, 100, 45);
        assert!(screen.contains("Erro"));
        assert!(screen.contains("Não foi possível abrir o WhatsApp."));
    }

    #[test]
    fn test_renders_splash() {
        let app = App::new(TuiConfig::default());
        let screen = render(&app, 80, 24);
        assert!(screen.contains("Federal Associados"));
        assert!(!screen.contains("Qual é o seu nome?"));
    }

    mod standard_terminal {
        use super::*;

        #[test]
        fn test_every_usage_option_and_button_fit() {
            let app = test_app();
            let screen = render(&app, 80, 24);
            for label in [
                "Uso pessoal",
                "Uso em família",
                "Uso para trabalho",
                "Uso em viagens",
                "Uso empresarial",
            ] {
                assert!(screen.contains(label), "{label} not on screen");
            }
            assert!(screen.contains("FALAR COM ATENDENTE"));
        }

        #[test]
        fn test_last_usage_option_visible_when_highlighted() {
            let mut app = test_app();
            app.state.form.focus(FieldId::UsageCategory);
            for _ in 0..4 {
                app.state.form.usage_next();
            }
            assert_eq!(app.state.form.usage_cursor, 4);
            let screen = render(&app, 80, 24);
            assert!(screen.contains("5. Uso empresarial"));
            assert!(screen.contains("FALAR COM ATENDENTE"));
        }

        #[test]
        fn test_errors_fit_after_failed_submit() {
            let mut app = test_app();
            app.state.form.revalidate();
            let screen = render(&app, 80, 24);
            assert_eq!(screen.matches("Este campo é obrigatório").count(), 3);
            assert!(screen.contains("Selecione uma opção"));
            assert!(screen.contains("FALAR COM ATENDENTE"));
        }
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = test_app();
        app.state.form.revalidate();
        app.state.form.set_active_field(2);
        app.state.form.open_state_picker();
        app.push_error("erro");
        render(&app, 20, 8);
    }
}
