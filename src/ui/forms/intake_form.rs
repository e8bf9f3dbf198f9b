//! Intake form rendering

use super::field_renderer::{draw_input, FieldLook};
use super::{state_picker, usage_choices};
use crate::app::App;
use crate::state::{FieldId, FormSlot, IntakeForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PLACEHOLDER_TEXT: &str = "Digite aqui...";
const PLACEHOLDER_STATE: &str = "Escolha seu estado";

fn look(form: &IntakeForm, field: FieldId) -> FieldLook {
    FieldLook {
        is_active: form.active_slot() == FormSlot::Field(field),
        error: form
            .flags()
            .is_invalid(field)
            .then_some(field.error_message()),
    }
}

/// Draw the intake form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // City
            Constraint::Length(3),             // State
            Constraint::Min(7),                // Usage
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Hand-off note
        ])
        .horizontal_margin(1)
        .split(area);

    for (field, input) in [(FieldId::Name, chunks[0]), (FieldId::City, chunks[1])] {
        draw_input(
            frame,
            input,
            field.question(),
            form.answers().get(field),
            PLACEHOLDER_TEXT,
            look(form, field),
            None,
        );
    }

    let arrow = if form.state_picker.is_open { "▲" } else { "▼" };
    draw_input(
        frame,
        chunks[2],
        FieldId::State.question(),
        form.answers().get(FieldId::State),
        PLACEHOLDER_STATE,
        look(form, FieldId::State),
        Some(arrow),
    );

    usage_choices::draw(
        frame,
        chunks[3],
        FieldId::UsageCategory.question(),
        form,
        look(form, FieldId::UsageCategory),
    );

    render_action_button(
        frame,
        chunks[4],
        "FALAR COM ATENDENTE",
        form.active_slot() == FormSlot::SubmitButton,
        Color::Green,
    );

    let note = Paragraph::new(Line::from(Span::styled(
        "Você será direcionado ao WhatsApp com suas informações já preenchidas",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(note, chunks[5]);

    // Drawn last so it overlays the fields below
    if form.state_picker.is_open {
        state_picker::draw(frame, chunks[2], form);
    }
}
