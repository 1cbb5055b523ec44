//! Application core: key dispatch and sync orchestration

use crate::api::{RecordClient, RecordStore};
use crate::config::TuiConfig;
use crate::state::{AppState, FieldKind, Severity, MSG_SUBMIT_OK};
use crate::sync::record_sync;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct, generic over the record store so tests can
/// drive the sync paths against a mock.
pub struct App<S: RecordStore> {
    /// Current application state
    pub state: AppState,
    /// Client for the record store
    client: S,
    /// Resolved application record id
    record_id: String,
    /// Whether the app should quit
    quit: bool,
}

impl App<RecordClient> {
    /// Create a new App instance and load the record into the form.
    pub async fn new(config: &TuiConfig) -> Result<Self> {
        let client = RecordClient::new(config.api_base_url());
        Ok(Self::with_store(client, config.record_id()).await)
    }
}

impl<S: RecordStore> App<S> {
    /// Build the app on a record store and load the record into the form.
    ///
    /// A failed load is reported but not fatal; the form starts from its
    /// defaults and stays fully interactive.
    pub async fn with_store(client: S, record_id: String) -> Self {
        let mut state = AppState::new();

        tracing::info!("fetching record {record_id}");
        match record_sync::load_into(&client, &record_id, &mut state.form).await {
            Ok(()) => state.notify("Datos del formulario cargados", Severity::Info),
            Err(err) => {
                tracing::error!("failed to load form data: {err}");
                state.notify(
                    format!("Error al cargar los datos del formulario: {err}"),
                    Severity::Error,
                );
            }
        }

        Self {
            state,
            client,
            record_id,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.quit = true;
                    return Ok(());
                }
                KeyCode::Char('s') => {
                    self.submit().await;
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    self.state.reset();
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }

        let step = self.state.wizard.current();
        match key.code {
            // Step navigation
            KeyCode::PageDown => {
                self.state.try_advance();
            }
            KeyCode::PageUp => {
                self.state.retreat();
            }
            KeyCode::F(n) => {
                let target = n.saturating_sub(1) as usize;
                if target < self.state.wizard.step_count() {
                    self.state.try_jump(target);
                }
            }

            // Field navigation within the step
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(step),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(step),

            // Editing
            KeyCode::Enter => {
                if let Some(field) = self.state.form.active_field_mut(step) {
                    match field.kind {
                        FieldKind::Checkbox => field.toggle(),
                        FieldKind::Select => field.cycle_option(),
                        _ => {}
                    }
                }
            }
            KeyCode::Char(' ') => {
                if let Some(field) = self.state.form.active_field_mut(step) {
                    match field.kind {
                        FieldKind::Checkbox => field.toggle(),
                        FieldKind::Select => field.cycle_option(),
                        _ => {
                            field.push_char(' ');
                            field.refresh_validity();
                        }
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.active_field_mut(step) {
                    field.push_char(c);
                    field.refresh_validity();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut(step) {
                    field.pop_char();
                    field.refresh_validity();
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Validate the final step, then merge and patch the record.
    ///
    /// Awaited inline from the key handler, so submissions are naturally
    /// serialized; the in-flight flag additionally drops re-entrant
    /// requests.
    async fn submit(&mut self) {
        if self.state.submit_in_flight || !self.state.wizard.is_last() {
            return;
        }
        if !self.state.validate_current_step() {
            return;
        }

        self.state.submit_in_flight = true;
        match record_sync::submit(&self.client, &self.record_id, &self.state.form).await {
            Ok(()) => {
                self.state.reset();
                self.state.notify(MSG_SUBMIT_OK, Severity::Success);
            }
            Err(err) => {
                tracing::error!("error submitting form: {err}");
                self.state.notify(
                    format!("Error al enviar el formulario: {err}"),
                    Severity::Error,
                );
            }
        }
        self.state.submit_in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockRecordStore};
    use crate::config::FALLBACK_RECORD_ID;
    use crate::state::MSG_STEP_INVALID;
    use crossterm::event::KeyEvent;
    use serde_json::json;

    fn offline_app() -> App<RecordClient> {
        App {
            state: AppState::new(),
            client: RecordClient::new("http://unused.invalid"),
            record_id: FALLBACK_RECORD_ID.to_string(),
            quit: false,
        }
    }

    fn mock_app(client: MockRecordStore) -> App<MockRecordStore> {
        App {
            state: AppState::new(),
            client,
            record_id: FALLBACK_RECORD_ID.to_string(),
            quit: false,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[tokio::test]
    async fn test_typing_edits_active_field_with_live_validation() {
        let mut app = offline_app();
        app.handle_key(key(KeyCode::Char('A'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('a'))).await.unwrap();

        let field = app.state.form.field("labNombre").unwrap();
        assert_eq!(field.as_text(), "Ana");
        assert!(!field.has_error);

        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert!(app.state.form.field("labNombre").unwrap().has_error);
    }

    #[tokio::test]
    async fn test_tab_cycles_fields_within_step() {
        let mut app = offline_app();
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        assert_eq!(app.state.form.active_field(), 1);
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        assert_eq!(app.state.form.active_field(), 4);
    }

    #[tokio::test]
    async fn test_page_down_blocked_by_empty_required_fields() {
        let mut app = offline_app();
        app.handle_key(key(KeyCode::PageDown)).await.unwrap();
        assert_eq!(app.state.wizard.current(), 0);
        assert!(app.state.notifications.latest().is_some());
    }

    #[tokio::test]
    async fn test_function_keys_jump_to_steps() {
        let mut app = offline_app();
        // Health step is reachable only once step 0 validates; F-keys past
        // the step count are ignored outright.
        app.handle_key(key(KeyCode::F(9))).await.unwrap();
        assert_eq!(app.state.wizard.current(), 0);
    }

    #[tokio::test]
    async fn test_ctrl_r_resets_markers() {
        let mut app = offline_app();
        app.handle_key(key(KeyCode::PageDown)).await.unwrap();
        assert!(app.state.form.field("labNombre").unwrap().has_error);
        app.handle_key(ctrl('r')).await.unwrap();
        assert!(app.state.form.fields().all(|f| !f.has_error));
        assert_eq!(app.state.wizard.current(), 0);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = offline_app();
        app.handle_key(ctrl('c')).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_space_toggles_checkbox_on_health_step() {
        let mut app = offline_app();
        app.state.wizard.jump_to(2);
        app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
        assert!(app
            .state
            .form
            .field("cerebrovascular_prospecto")
            .unwrap()
            .is_checked());
    }

    mod submission {
        use super::*;

        fn fill_to_last_step(state: &mut AppState) {
            let form = &mut state.form;
            form.field_mut("labNombre").unwrap().set_text("Ana".into());
            form.field_mut("labApellido").unwrap().set_text("Gómez".into());
            form.field_mut("labBirthDay")
                .unwrap()
                .set_text("1990-03-05".into());
            form.field_mut("labCorreoUser")
                .unwrap()
                .set_text("ana@example.com".into());
            form.field_mut("labTelefonoUser")
                .unwrap()
                .set_text("5512 3456 78".into());
            form.field_mut("labOcupacion")
                .unwrap()
                .set_text("Ingeniera".into());
            form.field_mut("labBeneficiario")
                .unwrap()
                .set_text("Luis Gómez".into());
            state.wizard.jump_to(3);
        }

        #[tokio::test]
        async fn test_success_resets_wizard_and_clears_markers() {
            let mut store = MockRecordStore::new();
            store.expect_fetch_record().times(1).returning(|_| {
                Ok([("labNombre".to_string(), json!("Vieja"))]
                    .into_iter()
                    .collect())
            });
            store.expect_patch_record().times(1).returning(|_| Ok(()));

            let mut app = mock_app(store);
            fill_to_last_step(&mut app.state);
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.wizard.current(), 0);
            assert!(app.state.form.fields().all(|f| !f.has_error));
            let latest = app.state.notifications.latest().unwrap();
            assert_eq!(latest.message, MSG_SUBMIT_OK);
            assert_eq!(latest.severity, Severity::Success);
            assert!(!app.state.submit_in_flight);
        }

        #[tokio::test]
        async fn test_failure_stays_on_last_step_and_reports() {
            let mut store = MockRecordStore::new();
            store.expect_fetch_record().times(1).returning(|_| {
                Ok([("labNombre".to_string(), json!("Vieja"))]
                    .into_iter()
                    .collect())
            });
            store
                .expect_patch_record()
                .returning(|_| Err(ApiError::Rejected("record locked".into())));

            let mut app = mock_app(store);
            fill_to_last_step(&mut app.state);
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.wizard.current(), 3);
            let latest = app.state.notifications.latest().unwrap();
            assert!(latest.message.contains("record locked"));
            assert_eq!(latest.severity, Severity::Error);
            assert!(!app.state.submit_in_flight);
        }

        #[tokio::test]
        async fn test_invalid_final_step_never_hits_the_store() {
            let mut store = MockRecordStore::new();
            store.expect_fetch_record().times(0);
            store.expect_patch_record().times(0);

            let mut app = mock_app(store);
            fill_to_last_step(&mut app.state);
            app.state
                .form
                .field_mut("labBeneficiario")
                .unwrap()
                .clear();
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.wizard.current(), 3);
            assert_eq!(
                app.state.notifications.latest().unwrap().message,
                MSG_STEP_INVALID
            );
        }

        #[tokio::test]
        async fn test_submit_ignored_before_last_step() {
            let mut store = MockRecordStore::new();
            store.expect_fetch_record().times(0);
            store.expect_patch_record().times(0);

            let mut app = mock_app(store);
            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.wizard.current(), 0);
        }
    }
}
