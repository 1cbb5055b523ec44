//! Step validation for the wizard gate

use super::field::FieldKind;
use super::form_state::ApplicationForm;

/// Classes of rule violation, each of which gets its own notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleClass {
    MissingRequired,
    BadEmail,
    BadPhone,
    BadDate,
}

/// Outcome of validating one step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub missing_required: bool,
    pub bad_email: bool,
    pub bad_phone: bool,
    pub bad_date: bool,
}

impl StepReport {
    pub fn is_valid(&self) -> bool {
        !(self.missing_required || self.bad_email || self.bad_phone || self.bad_date)
    }

    pub fn violations(&self) -> Vec<RuleClass> {
        let mut out = Vec::new();
        if self.missing_required {
            out.push(RuleClass::MissingRequired);
        }
        if self.bad_email {
            out.push(RuleClass::BadEmail);
        }
        if self.bad_phone {
            out.push(RuleClass::BadPhone);
        }
        if self.bad_date {
            out.push(RuleClass::BadDate);
        }
        out
    }
}

/// Validate every field of a step, marking each one.
///
/// Deliberately non-short-circuiting: all fields are checked and their
/// error markers set or cleared before the report is returned.
pub fn validate_step(form: &mut ApplicationForm, step: usize) -> StepReport {
    let mut report = StepReport::default();
    let Some(step) = form.steps.get_mut(step) else {
        return report;
    };

    for field in &mut step.fields {
        let text = field.as_text().to_string();
        let empty = text.trim().is_empty();

        if field.required && empty {
            report.missing_required = true;
        }
        match field.kind {
            FieldKind::Email if !text.is_empty() && !field.is_valid() => {
                report.bad_email = true;
            }
            FieldKind::Phone if !text.is_empty() && !field.is_valid() => {
                report.bad_phone = true;
            }
            FieldKind::Date if !text.is_empty() && !field.is_valid() => {
                report.bad_date = true;
            }
            _ => {}
        }

        field.refresh_validity();
    }

    report
}
