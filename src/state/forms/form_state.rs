//! Form state management for the application wizard

use super::field::{FieldKind, FormField};
use crate::sync::dates;
use crate::sync::health;
use crate::sync::merge::RecordMap;
use serde_json::Value;

const PARENTESCO_OPTIONS: &[&str] = &["conyuge", "hijos", "padres", "otro"];

/// One wizard pane's worth of fields.
#[derive(Debug, Clone)]
pub struct FormStep {
    pub title: &'static str,
    pub fields: Vec<FormField>,
}

/// The complete insurance application form: ordered steps plus a cursor
/// for the active field within the current step.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    pub steps: Vec<FormStep>,
    active_field_index: usize,
}

impl ApplicationForm {
    pub fn new() -> Self {
        let personal = FormStep {
            title: "Datos personales",
            fields: vec![
                FormField::text("labNombre", "Nombre", true),
                FormField::text("labApellido", "Apellido", true),
                FormField::date("labBirthDay", "Fecha de nacimiento", true),
                FormField::email("labCorreoUser", "Correo electrónico", true),
                FormField::phone("labTelefonoUser", "Teléfono", true),
            ],
        };

        let laboral = FormStep {
            title: "Información laboral",
            fields: vec![
                FormField::text("labOcupacion", "Ocupación", true),
                FormField::text("labEmpresa", "Empresa", false),
                FormField::date("labInicioLaboral", "Inicio laboral", false),
                FormField::text("labIngresoMensual", "Ingreso mensual", false),
                FormField::phone("labTelefonoTrabajo", "Teléfono del trabajo", false),
            ],
        };

        let salud = FormStep {
            title: "Cuestionario de salud",
            fields: health::HEALTH_QUESTIONNAIRE
                .iter()
                .map(|(group, _)| FormField::checkbox(group, health_label(group)))
                .collect(),
        };

        let beneficiarios = FormStep {
            title: "Beneficiarios",
            fields: vec![
                FormField::text("labBeneficiario", "Beneficiario", true),
                FormField::select("labParentesco", "Parentesco", PARENTESCO_OPTIONS),
                FormField::text("labPorcentaje", "Porcentaje", false),
            ],
        };

        Self {
            steps: vec![personal, laboral, salud, beneficiarios],
            active_field_index: 0,
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&FormStep> {
        self.steps.get(index)
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    /// Reset the field cursor, as done when entering a step.
    pub fn reset_cursor(&mut self) {
        self.active_field_index = 0;
    }

    pub fn next_field(&mut self, step: usize) {
        if let Some(step) = self.steps.get(step) {
            self.active_field_index = (self.active_field_index + 1) % step.fields.len();
        }
    }

    pub fn prev_field(&mut self, step: usize) {
        if let Some(step) = self.steps.get(step) {
            if self.active_field_index == 0 {
                self.active_field_index = step.fields.len() - 1;
            } else {
                self.active_field_index -= 1;
            }
        }
    }

    pub fn active_field_mut(&mut self, step: usize) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.steps
            .get_mut(step)
            .and_then(|s| s.fields.get_mut(index))
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.steps
            .iter_mut()
            .flat_map(|s| s.fields.iter_mut())
            .find(|f| f.name == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    /// Populate the form from a fetched record.
    ///
    /// Direct fields are matched by record key: checkboxes take the
    /// boolean value, date fields convert `DD-MMM-YYYY` to ISO, everything
    /// else takes the raw value with null becoming the empty string. A
    /// second pass applies the health-questionnaire mapping. Application
    /// is per-field, so one bad value never blocks the rest.
    pub fn apply_record(&mut self, record: &RecordMap) {
        for (key, value) in record {
            let Some(field) = self.field_mut(key) else {
                continue;
            };
            match field.kind {
                FieldKind::Checkbox => field.set_checked(value.as_bool().unwrap_or(false)),
                FieldKind::Date => match value.as_str() {
                    None | Some("") => field.set_text(String::new()),
                    Some(raw) => match dates::spanish_to_iso(raw) {
                        Ok(iso) => field.set_text(iso),
                        Err(err) => {
                            tracing::warn!("skipping date field {key}: {err}");
                        }
                    },
                },
                _ => field.set_text(scalar_text(value)),
            }
        }

        for (key, value) in record {
            if let Some(group) = health::group_field(key) {
                let checked = value.as_bool().unwrap_or(false);
                if let Some(field) = self.field_mut(group) {
                    field.set_checked(checked);
                }
            }
        }
    }

    /// Current form values keyed the way the record store expects:
    /// text-valued fields under their own name, health checkboxes under
    /// their mapped API field name as booleans.
    pub fn values(&self) -> RecordMap {
        let mut out = RecordMap::new();
        for field in self.fields() {
            if field.kind == FieldKind::Checkbox {
                let key = health::api_field(&field.name).unwrap_or(&field.name);
                out.insert(key.to_string(), Value::Bool(field.is_checked()));
            } else {
                out.insert(
                    field.name.clone(),
                    Value::String(field.as_text().to_string()),
                );
            }
        }
        out
    }

    /// Clear every field's error marker.
    pub fn clear_errors(&mut self) {
        for step in &mut self.steps {
            for field in &mut step.fields {
                field.has_error = false;
            }
        }
    }
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}

fn health_label(group: &str) -> &'static str {
    let condition = match group.split('_').next().unwrap_or("") {
        "cerebrovascular" => "Cerebrovascular",
        "epilepsia" => "Epilepsia",
        "ojos" => "Ojos",
        "respiratorio" => "Respiratorio",
        _ => "Cardiaco",
    };
    let relation = match group.rsplit('_').next().unwrap_or("") {
        "prospecto" => "prospecto",
        "conyuge" => "cónyuge",
        _ => "hijos",
    };
    // Static per (condition, relation) pair.
    match (condition, relation) {
        ("Cerebrovascular", "prospecto") => "Cerebrovascular: prospecto",
        ("Cerebrovascular", "cónyuge") => "Cerebrovascular: cónyuge",
        ("Cerebrovascular", _) => "Cerebrovascular: hijos",
        ("Epilepsia", "prospecto") => "Epilepsia: prospecto",
        ("Epilepsia", "cónyuge") => "Epilepsia: cónyuge",
        ("Epilepsia", _) => "Epilepsia: hijos",
        ("Ojos", "prospecto") => "Ojos: prospecto",
        ("Ojos", "cónyuge") => "Ojos: cónyuge",
        ("Ojos", _) => "Ojos: hijos",
        ("Respiratorio", "prospecto") => "Respiratorio: prospecto",
        ("Respiratorio", "cónyuge") => "Respiratorio: cónyuge",
        ("Respiratorio", _) => "Respiratorio: hijos",
        (_, "prospecto") => "Cardiaco: prospecto",
        (_, "cónyuge") => "Cardiaco: cónyuge",
        _ => "Cardiaco: hijos",
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
