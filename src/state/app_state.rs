//! Application state and gated wizard transitions

use super::forms::{validate_step, ApplicationForm, RuleClass};
use super::notifications::{Notifications, Severity};
use super::wizard::Wizard;

pub const MSG_MISSING_REQUIRED: &str = "Por favor complete los campos obligatorios";
pub const MSG_BAD_EMAIL: &str = "Por favor ingrese un correo electrónico válido";
pub const MSG_BAD_PHONE: &str = "Por favor ingrese un número de teléfono válido";
pub const MSG_BAD_DATE: &str = "Por favor ingrese una fecha válida (AAAA-MM-DD)";
pub const MSG_STEP_INVALID: &str =
    "Por favor complete todos los campos requeridos correctamente.";
pub const MSG_SUBMIT_OK: &str = "¡Formulario enviado exitosamente!";

/// Everything the UI renders: the form, the wizard position, and the
/// notification queue.
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: ApplicationForm,
    pub wizard: Wizard,
    pub notifications: Notifications,
    /// Set while a submission is awaited; further submits are ignored.
    pub submit_in_flight: bool,
}

impl AppState {
    pub fn new() -> Self {
        let form = ApplicationForm::new();
        let wizard = Wizard::new(form.step_count());
        Self {
            form,
            wizard,
            notifications: Notifications::default(),
            submit_in_flight: false,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifications.push(message, severity);
    }

    /// Run the validation gate for the visible step, emitting one
    /// notification per violated rule class plus the generic one.
    pub fn validate_current_step(&mut self) -> bool {
        let report = validate_step(&mut self.form, self.wizard.current());
        if report.is_valid() {
            return true;
        }
        for class in report.violations() {
            let message = match class {
                RuleClass::MissingRequired => MSG_MISSING_REQUIRED,
                RuleClass::BadEmail => MSG_BAD_EMAIL,
                RuleClass::BadPhone => MSG_BAD_PHONE,
                RuleClass::BadDate => MSG_BAD_DATE,
            };
            self.notify(message, Severity::Warning);
        }
        self.notify(MSG_STEP_INVALID, Severity::Error);
        false
    }

    /// `next`: gated on validating the visible step.
    pub fn try_advance(&mut self) -> bool {
        if !self.validate_current_step() {
            return false;
        }
        if self.wizard.advance() {
            self.form.reset_cursor();
            true
        } else {
            false
        }
    }

    /// `jumpTo`: gated on validating the step being left.
    pub fn try_jump(&mut self, step: usize) -> bool {
        if !self.validate_current_step() {
            return false;
        }
        if self.wizard.jump_to(step) {
            self.form.reset_cursor();
            true
        } else {
            false
        }
    }

    /// `prev`: never gated.
    pub fn retreat(&mut self) -> bool {
        if self.wizard.retreat() {
            self.form.reset_cursor();
            true
        } else {
            false
        }
    }

    /// `reset`: back to step 0 with all error markers cleared, no
    /// validation involved.
    pub fn reset(&mut self) {
        self.wizard.reset();
        self.form.reset_cursor();
        self.form.clear_errors();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
