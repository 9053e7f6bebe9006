use crate::models::{DoctorInfo, FormFields, MessageBarState, SelectOption};

/// The page elements the booking logic drives.
///
/// Implementations bind their elements once at construction and hold them;
/// the page controller never looks elements up on its own.
pub trait BookingView {
    /// Status line shared by every component.
    fn show_message(&mut self, state: &MessageBarState);

    /// Replace the specialty options. The first option becomes selected.
    fn set_specialty_options(&mut self, options: &[SelectOption]);

    /// Value of the selected specialty option, empty for the placeholder.
    fn selected_specialty(&self) -> String;

    /// Replace the doctor options. The first option becomes selected.
    fn set_doctor_options(&mut self, options: &[SelectOption]);

    /// Value of the selected doctor option, empty for the placeholder.
    fn selected_doctor(&self) -> String;

    /// Compact price/duration callout plus the example card.
    fn show_doctor_info(&mut self, info: &DoctorInfo);

    /// Run native constraint validation, letting the view display its own
    /// feedback. Returns whether the form is valid.
    fn report_validity(&mut self) -> bool;

    fn form_fields(&self) -> FormFields;

    fn submit_enabled(&self) -> bool;

    fn submit_label(&self) -> String;

    fn set_submit_control(&mut self, enabled: bool, label: &str);

    /// Full-page navigation to `url`.
    fn navigate(&mut self, url: &str);
}
