//! Application state and core logic

use crate::config::TuiConfig;
use crate::error::IntakeError;
use crate::launcher::{BrowserLauncher, LinkLauncher};
use crate::message::chat_link;
use crate::state::{AppState, FieldId, Form, FormSlot, SplashState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Opens the chat link after a successful submit
    launcher: Box<dyn LinkLauncher>,
    /// User preferences
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App that opens links in the system browser
    pub fn new(config: TuiConfig) -> Self {
        Self::with_launcher(config, Box::new(BrowserLauncher::new()))
    }

    /// Create a new App with a custom link launcher
    pub fn with_launcher(config: TuiConfig, launcher: Box<dyn LinkLauncher>) -> Self {
        let mut state = AppState::default();
        let splash_state = if config.skip_splash() {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new())
        };

        Self {
            state,
            launcher,
            config,
            quit: false,
            status_message: None,
            splash_state,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Intake;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Intake => self.handle_intake_key(key).await?,
        }

        Ok(())
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    /// Handle keys in the intake form
    async fn handle_intake_key(&mut self, key: KeyEvent) -> Result<()> {
        // Keyboard shortcuts (work from anywhere)
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
                return Ok(());
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.submit().await;
                return Ok(());
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_link();
                return Ok(());
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return Ok(());
            }
            _ => {}
        }

        // Clear any status messages on other key presses
        self.status_message = None;

        if self.state.form.state_picker.is_open {
            self.handle_state_picker_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => {
                self.state.form.next_field();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.form.prev_field();
                return Ok(());
            }
            _ => {}
        }

        let form = &mut self.state.form;
        match form.active_slot() {
            FormSlot::Field(field) if field.is_text() => match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.clear_active_text();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.push_char(c);
                }
                KeyCode::Backspace => {
                    form.pop_char();
                }
                KeyCode::Enter | KeyCode::Down => form.next_field(),
                KeyCode::Up => form.prev_field(),
                _ => {}
            },
            FormSlot::Field(FieldId::State) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => form.toggle_state_picker(),
                KeyCode::Char(c) if c.is_alphabetic() => form.open_state_picker_at(c),
                KeyCode::Down => form.next_field(),
                KeyCode::Up => form.prev_field(),
                _ => {}
            },
            FormSlot::Field(_) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => form.usage_prev(),
                KeyCode::Down | KeyCode::Char('j') => form.usage_next(),
                KeyCode::Enter | KeyCode::Char(' ') => form.select_highlighted_usage(),
                KeyCode::Char(c) => {
                    if let Some(d) = c.to_digit(10).filter(|d| *d >= 1) {
                        form.select_usage(d as usize - 1);
                    }
                }
                _ => {}
            },
            FormSlot::SubmitButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit().await,
                KeyCode::Up => self.state.form.prev_field(),
                _ => {}
            },
        }

        Ok(())
    }

    /// Handle keys while the state dropdown is open
    fn handle_state_picker_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Esc => form.close_state_picker(),
            KeyCode::Enter | KeyCode::Char(' ') => form.picker_confirm(),
            KeyCode::Up => form.picker_prev(),
            KeyCode::Down => form.picker_next(),
            KeyCode::Home => form.picker_first(),
            KeyCode::End => form.picker_last(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Char(c) if c.is_alphabetic() => form.picker_jump(c),
            _ => {}
        }
    }

    /// Validate the form and, when complete, hand the customer over to the
    /// attendant by opening the chat link.
    ///
    /// An incomplete form only updates the flags and moves focus to the first
    /// missing answer. Answers are never cleared.
    pub async fn submit(&mut self) {
        self.state.form.close_state_picker();

        if !self.state.form.revalidate() {
            let missing = self.state.form.flags().missing_fields();
            tracing::debug!("Submit rejected: {}", IntakeError::MissingFields(missing));
            self.state.form.focus_first_invalid();
            self.status_message = Some("Preencha os campos obrigatórios".to_string());
            return;
        }

        let answers = self.state.form.answers();
        let link = chat_link(self.config.phone_number(), answers);
        tracing::info!(usage = %answers.usage_category, "Opening chat link");
        self.state.last_link = Some(link.clone());

        match self.launcher.open(&link).await {
            Ok(()) => {
                self.status_message = Some("Abrindo WhatsApp...".to_string());
            }
            Err(e) => {
                tracing::warn!("Failed to open chat link: {e}");
                let fallback = self.link_fallback_message(&link);
                self.push_error(format!(
                    "Não foi possível abrir o WhatsApp.\n{fallback}"
                ));
            }
        }
    }

    /// Tell the user how to reach the attendant when the browser did not open
    fn link_fallback_message(&self, link: &str) -> String {
        if self.config.copy_link_on_failure() {
            match self.copy_to_clipboard(link) {
                Ok(()) => return "O link foi copiado para a área de transferência.".to_string(),
                Err(e) => tracing::warn!("{e}"),
            }
        }
        format!("Abra este link no navegador:\n{link}")
    }

    /// Copy the link from the last successful submit
    fn copy_last_link(&mut self) {
        let Some(link) = self.state.last_link.clone() else {
            self.status_message = Some("Nenhum link gerado ainda".to_string());
            return;
        };
        match self.copy_to_clipboard(&link) {
            Ok(()) => self.status_message = Some("Link copiado".to_string()),
            Err(e) => self.push_error(format!("Falha ao copiar o link: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), IntakeError> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
