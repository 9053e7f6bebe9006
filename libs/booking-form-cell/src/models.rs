use shared_models::{BookingError, Doctor};

pub const SPECIALTY_PLACEHOLDER: &str = "Elegí una opción…";
pub const DOCTOR_PLACEHOLDER: &str = "Elegí un médico…";
pub const SUBMIT_LABEL: &str = "Solicitar turno y pagar";
pub const SUBMIT_PROGRESS_LABEL: &str = "Generando pago…";

pub const PRICE_PLACEHOLDER: &str = "$—";
pub const DURATION_PLACEHOLDER: &str = "— min";
pub const CARD_NAME_PLACEHOLDER: &str = "Seleccioná un médico";
pub const CARD_SPECIALTY_PLACEHOLDER: &str = "Online";
pub const CARD_PRICE_PLACEHOLDER: &str = "$ —";

/// One `<option>` of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn placeholder(label: &str) -> Self {
        Self::new("", label)
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Example card shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCard {
    pub name: String,
    pub specialty: String,
    pub price: String,
    pub duration: String,
}

/// Everything the info display shows for the current doctor selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorInfo {
    pub price: String,
    pub duration: String,
    pub card: DoctorCard,
}

impl DoctorInfo {
    pub fn placeholder() -> Self {
        Self {
            price: PRICE_PLACEHOLDER.to_string(),
            duration: DURATION_PLACEHOLDER.to_string(),
            card: DoctorCard {
                name: CARD_NAME_PLACEHOLDER.to_string(),
                specialty: CARD_SPECIALTY_PLACEHOLDER.to_string(),
                price: CARD_PRICE_PLACEHOLDER.to_string(),
                duration: DURATION_PLACEHOLDER.to_string(),
            },
        }
    }

    pub fn for_doctor(doctor: &Doctor) -> Self {
        Self {
            price: doctor.price_label(),
            duration: doctor.duration_label(),
            card: DoctorCard {
                name: doctor.name.clone(),
                specialty: doctor.specialty.clone(),
                price: doctor.price_label(),
                duration: doctor.duration_label(),
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

impl Default for DoctorInfo {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Ok,
    Error,
}

impl MessageKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Ok => "ok",
            MessageKind::Error => "error",
        }
    }
}

/// Rendered state of the status line. Hidden when `text` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBarState {
    pub text: String,
    pub kind: Option<MessageKind>,
    pub visible: bool,
}

/// Raw values of the free-text and date/time inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    Unloaded,
    Loaded,
    LoadFailed,
}

/// User and browser events the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Ready,
    SpecialtyChanged,
    DoctorChanged,
    SubmitClicked,
    FormSubmitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Native validation rejected the form; nothing was sent.
    Invalid,
    /// No doctor selected; nothing was sent.
    MissingDoctor,
    /// The submit control was already disabled by an in-flight submission.
    Ignored,
    Redirected(String),
    Failed(BookingError),
}
