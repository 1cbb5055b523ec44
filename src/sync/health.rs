//! Health questionnaire checkbox-group to API field mapping
//!
//! The record store flattens the questionnaire into `labProspectoN` /
//! `labConyugeN` / `labHijosN` booleans, while the form groups checkboxes
//! by condition and relation. One static table serves both directions.

/// (checkbox-group key, API field key) pairs, in questionnaire order.
pub const HEALTH_QUESTIONNAIRE: &[(&str, &str)] = &[
    ("cerebrovascular_prospecto", "labProspecto1"),
    ("cerebrovascular_conyuge", "labConyuge1"),
    ("cerebrovascular_hijos", "labHijos1"),
    ("epilepsia_prospecto", "labProspecto2"),
    ("epilepsia_conyuge", "labConyuge2"),
    ("epilepsia_hijos", "labHijos2"),
    ("ojos_prospecto", "labProspecto3"),
    ("ojos_conyuge", "labConyuge3"),
    ("ojos_hijos", "labHijos3"),
    ("respiratorio_prospecto", "labProspecto4"),
    ("respiratorio_conyuge", "labConyuge4"),
    ("respiratorio_hijos", "labHijos4"),
    ("cardiaco_prospecto", "labProspecto5"),
    ("cardiaco_conyuge", "labConyuge5"),
    ("cardiaco_hijos", "labHijos5"),
];

/// API field for a checkbox-group key.
pub fn api_field(group: &str) -> Option<&'static str> {
    HEALTH_QUESTIONNAIRE
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, api)| *api)
}

/// Checkbox-group key for an API field.
pub fn group_field(api: &str) -> Option<&'static str> {
    HEALTH_QUESTIONNAIRE
        .iter()
        .find(|(_, a)| *a == api)
        .map(|(g, _)| *g)
}
