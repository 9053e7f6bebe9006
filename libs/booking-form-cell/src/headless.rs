use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::models::{
    DoctorInfo, FormFields, MessageBarState, SelectOption, DOCTOR_PLACEHOLDER,
    SPECIALTY_PLACEHOLDER, SUBMIT_LABEL,
};
use crate::view::BookingView;

// Same grammar browsers use for <input type="email">.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Date,
    Time,
    Reason,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "nombre",
            FormField::Email => "email",
            FormField::Date => "fecha",
            FormField::Time => "hora",
            FormField::Reason => "motivo",
        }
    }
}

/// In-memory page with the same element contract as the booking form.
///
/// Starts in the state the static markup has before any script runs:
/// placeholder-only selectors, placeholder info, hidden status line and an
/// enabled submit button.
#[derive(Debug, Clone)]
pub struct HeadlessView {
    pub message: MessageBarState,
    pub specialty_options: Vec<SelectOption>,
    pub doctor_options: Vec<SelectOption>,
    pub info: DoctorInfo,
    pub fields: FormFields,
    pub required: Vec<FormField>,
    pub submit_enabled: bool,
    pub submit_label: String,
    /// Every (enabled, label) pair the submit control went through.
    pub submit_history: Vec<(bool, String)>,
    pub validation_errors: Vec<String>,
    pub location: Option<String>,
    specialty_value: String,
    doctor_value: String,
}

impl Default for HeadlessView {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessView {
    pub fn new() -> Self {
        Self {
            message: MessageBarState::default(),
            specialty_options: vec![SelectOption::placeholder(SPECIALTY_PLACEHOLDER)],
            doctor_options: vec![SelectOption::placeholder(DOCTOR_PLACEHOLDER)],
            info: DoctorInfo::placeholder(),
            fields: FormFields::default(),
            required: vec![FormField::Name, FormField::Email, FormField::Date, FormField::Time],
            submit_enabled: true,
            submit_label: SUBMIT_LABEL.to_string(),
            submit_history: Vec::new(),
            validation_errors: Vec::new(),
            location: None,
            specialty_value: String::new(),
            doctor_value: String::new(),
        }
    }

    /// Pick a specialty like a user would. Unknown values are ignored.
    pub fn select_specialty(&mut self, value: &str) -> bool {
        if self.specialty_options.iter().any(|o| o.value == value) {
            self.specialty_value = value.to_string();
            true
        } else {
            false
        }
    }

    /// Pick a doctor like a user would. Unknown values are ignored.
    pub fn select_doctor(&mut self, value: &str) -> bool {
        if self.doctor_options.iter().any(|o| o.value == value) {
            self.doctor_value = value.to_string();
            true
        } else {
            false
        }
    }

    /// Force a raw selector value, bypassing the option list.
    pub fn force_doctor_value(&mut self, value: &str) {
        self.doctor_value = value.to_string();
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Date => &mut self.fields.date,
            FormField::Time => &mut self.fields.time,
            FormField::Reason => &mut self.fields.reason,
        };
        *slot = value.to_string();
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Date => &self.fields.date,
            FormField::Time => &self.fields.time,
            FormField::Reason => &self.fields.reason,
        }
    }

    /// Labels of the doctor options, `"value: label"` for real entries.
    pub fn doctor_option_labels(&self) -> Vec<String> {
        option_labels(&self.doctor_options)
    }

    pub fn specialty_option_labels(&self) -> Vec<String> {
        option_labels(&self.specialty_options)
    }

    fn constraint_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for field in &self.required {
            if self.field(*field).is_empty() {
                errors.push(format!("Completá el campo {}.", field.label()));
            }
        }

        let email = self.fields.email.trim();
        if !email.is_empty() && !email_regex().is_match(email) {
            errors.push(format!("\"{}\" no es un email válido.", email));
        }

        errors
    }
}

fn option_labels(options: &[SelectOption]) -> Vec<String> {
    options
        .iter()
        .map(|o| {
            if o.is_placeholder() {
                String::new()
            } else if o.value == o.label {
                o.label.clone()
            } else {
                format!("{}: {}", o.value, o.label)
            }
        })
        .collect()
}

impl BookingView for HeadlessView {
    fn show_message(&mut self, state: &MessageBarState) {
        self.message = state.clone();
    }

    fn set_specialty_options(&mut self, options: &[SelectOption]) {
        self.specialty_options = options.to_vec();
        self.specialty_value = first_value(options);
    }

    fn selected_specialty(&self) -> String {
        self.specialty_value.clone()
    }

    fn set_doctor_options(&mut self, options: &[SelectOption]) {
        self.doctor_options = options.to_vec();
        self.doctor_value = first_value(options);
    }

    fn selected_doctor(&self) -> String {
        self.doctor_value.clone()
    }

    fn show_doctor_info(&mut self, info: &DoctorInfo) {
        self.info = info.clone();
    }

    fn report_validity(&mut self) -> bool {
        self.validation_errors = self.constraint_errors();
        if !self.validation_errors.is_empty() {
            debug!("Form invalid: {:?}", self.validation_errors);
        }
        self.validation_errors.is_empty()
    }

    fn form_fields(&self) -> FormFields {
        self.fields.clone()
    }

    fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    fn submit_label(&self) -> String {
        self.submit_label.clone()
    }

    fn set_submit_control(&mut self, enabled: bool, label: &str) {
        self.submit_enabled = enabled;
        self.submit_label = label.to_string();
        self.submit_history.push((enabled, label.to_string()));
    }

    fn navigate(&mut self, url: &str) {
        self.location = Some(url.to_string());
    }
}

fn first_value(options: &[SelectOption]) -> String {
    options.first().map(|o| o.value.clone()).unwrap_or_default()
}
