//! Form field value objects

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s()-]{10,}$").expect("phone pattern"));

/// Semantic kind of a field, driving validation and record conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    Checkbox,
    Select,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
///
/// `name` is the record key for direct fields, or the checkbox-group key
/// for health-questionnaire entries.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub required: bool,
    pub has_error: bool,
    /// Options for select fields; empty for every other kind.
    pub options: &'static [&'static str],
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        let value = match kind {
            FieldKind::Checkbox => FieldValue::Checkbox(false),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value,
            required,
            has_error: false,
            options: &[],
        }
    }

    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required)
    }

    pub fn email(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Email, required)
    }

    pub fn phone(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Phone, required)
    }

    /// Date fields hold their value as `YYYY-MM-DD`.
    pub fn date(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Date, required)
    }

    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Checkbox, false)
    }

    pub fn select(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        let mut field = Self::new(name, label, FieldKind::Select, false);
        field.options = options;
        field
    }

    /// Get the text value (empty for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Get the checkbox state (false for text-valued fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.value = FieldValue::Checkbox(checked);
    }

    /// Push a character to the field value.
    ///
    /// Phone fields re-apply the display grouping after every edit;
    /// select fields only accept values through [`cycle_option`];
    /// checkboxes ignore character input.
    ///
    /// [`cycle_option`]: FormField::cycle_option
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Checkbox | FieldKind::Select => {}
            FieldKind::Phone => {
                if let FieldValue::Text(s) = &mut self.value {
                    s.push(c);
                    *s = format_phone(s);
                }
            }
            _ => {
                if let FieldValue::Text(s) = &mut self.value {
                    s.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match self.kind {
            FieldKind::Checkbox | FieldKind::Select => {}
            FieldKind::Phone => {
                if let FieldValue::Text(s) = &mut self.value {
                    let mut digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
                    digits.pop();
                    *s = format_phone(&digits);
                }
            }
            _ => {
                if let FieldValue::Text(s) = &mut self.value {
                    s.pop();
                }
            }
        }
    }

    /// Toggle a checkbox; no-op for other kinds.
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Advance a select field to its next option, wrapping around.
    pub fn cycle_option(&mut self) {
        if self.kind != FieldKind::Select || self.options.is_empty() {
            return;
        }
        let current = self.as_text().to_string();
        let next = match self.options.iter().position(|&o| o == current) {
            Some(i) => self.options[(i + 1) % self.options.len()],
            None => self.options[0],
        };
        self.set_text(next.to_string());
    }

    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Checkbox(c) => *c = false,
        }
    }

    /// Check the field's own rules: required emptiness plus the email,
    /// phone, and date formats for present values. Does not touch
    /// `has_error`.
    ///
    /// Date input is free text here, unlike the browser's date picker,
    /// so a present value must parse as a real `YYYY-MM-DD` date.
    pub fn is_valid(&self) -> bool {
        let text = self.as_text();
        if self.required && text.trim().is_empty() {
            return false;
        }
        match self.kind {
            FieldKind::Email if !text.is_empty() => EMAIL_RE.is_match(text),
            FieldKind::Phone if !text.is_empty() => PHONE_RE.is_match(text),
            FieldKind::Date if !text.is_empty() => {
                NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
            }
            _ => true,
        }
    }

    /// Re-run the field's rules and update the error marker, as done on
    /// every edit.
    pub fn refresh_validity(&mut self) {
        self.has_error = !self.is_valid();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checkbox(checked) => {
                if *checked { "[x]" } else { "[ ]" }.to_string()
            }
        }
    }
}

/// Strip non-digits and regroup by 4 with single spaces.
///
/// Idempotent: formatting an already-formatted value yields it unchanged.
pub fn format_phone(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}
