//! Form domain layer
//!
//! Type-safe form handling for the application wizard: fields, steps, and
//! the step-validation gate.

mod field;
mod form_state;
mod validation;

pub use field::{FieldKind, FormField};
pub use form_state::ApplicationForm;
pub use validation::{validate_step, RuleClass};
