use tracing::debug;

use crate::directory::DoctorDirectory;
use crate::models::{DoctorInfo, SelectOption, DOCTOR_PLACEHOLDER, SPECIALTY_PLACEHOLDER};
use crate::view::BookingView;

/// Keeps the doctor selector and the info display in step with the
/// specialty and doctor selectors. Holds no state of its own.
pub struct SelectionSynchronizer;

impl SelectionSynchronizer {
    pub fn specialty_options(directory: &DoctorDirectory) -> Vec<SelectOption> {
        std::iter::once(SelectOption::placeholder(SPECIALTY_PLACEHOLDER))
            .chain(
                directory
                    .specialties()
                    .into_iter()
                    .map(|s| SelectOption::new(s.clone(), s)),
            )
            .collect()
    }

    pub fn doctor_options(directory: &DoctorDirectory, specialty: &str) -> Vec<SelectOption> {
        std::iter::once(SelectOption::placeholder(DOCTOR_PLACEHOLDER))
            .chain(
                directory
                    .filter_by_specialty(specialty)
                    .map(|d| SelectOption::new(d.id.to_string(), d.option_label())),
            )
            .collect()
    }

    pub fn info_for(directory: &DoctorDirectory, doctor_value: &str) -> DoctorInfo {
        parse_doctor_id(doctor_value)
            .and_then(|id| directory.find(id))
            .map(DoctorInfo::for_doctor)
            .unwrap_or_else(DoctorInfo::placeholder)
    }

    /// Rebuild the doctor selector for the current specialty. The doctor
    /// choice goes back to the placeholder.
    pub fn refresh_doctor_options<V: BookingView + ?Sized>(directory: &DoctorDirectory, view: &mut V) {
        let specialty = view.selected_specialty();
        let options = Self::doctor_options(directory, &specialty);
        debug!("Doctor selector rebuilt for specialty {:?} with {} doctors", specialty, options.len() - 1);
        view.set_doctor_options(&options);
    }

    pub fn refresh_doctor_info<V: BookingView + ?Sized>(directory: &DoctorDirectory, view: &mut V) {
        let info = Self::info_for(directory, &view.selected_doctor());
        view.show_doctor_info(&info);
    }
}

/// Decimal doctor id from a selector value; empty or non-numeric yields `None`.
pub fn parse_doctor_id(value: &str) -> Option<i64> {
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::Doctor;

    fn directory() -> DoctorDirectory {
        let mut directory = DoctorDirectory::new();
        directory.replace(vec![
            Doctor {
                id: 1,
                name: "A".to_string(),
                specialty: "Cardio".to_string(),
                price: 100.0,
                duration_min: 20,
            },
            Doctor {
                id: 2,
                name: "B".to_string(),
                specialty: "Dermato".to_string(),
                price: 80.5,
                duration_min: 15,
            },
        ]);
        directory
    }

    #[test]
    fn test_parse_doctor_id() {
        assert_eq!(parse_doctor_id("12"), Some(12));
        assert_eq!(parse_doctor_id(""), None);
        assert_eq!(parse_doctor_id("abc"), None);
        assert_eq!(parse_doctor_id("12abc"), None);
    }

    #[test]
    fn test_doctor_options_label_and_value() {
        let options = SelectionSynchronizer::doctor_options(&directory(), "Cardio");
        assert_eq!(
            options,
            vec![
                SelectOption::placeholder(DOCTOR_PLACEHOLDER),
                SelectOption::new("1", "A · Cardio"),
            ]
        );
    }

    #[test]
    fn test_specialty_options_start_with_placeholder() {
        let options = SelectionSynchronizer::specialty_options(&directory());
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "Cardio", "Dermato"]);
    }

    #[test]
    fn test_info_for_unknown_or_invalid_id_is_placeholder() {
        let directory = directory();
        for value in ["", "99", "x", "-"] {
            let info = SelectionSynchronizer::info_for(&directory, value);
            assert!(info.is_placeholder(), "value {:?}", value);
            assert_eq!(info.price, "$—");
            assert_eq!(info.duration, "— min");
        }
    }

    #[test]
    fn test_info_for_known_doctor() {
        let info = SelectionSynchronizer::info_for(&directory(), "2");
        assert_eq!(info.price, "$80.5");
        assert_eq!(info.duration, "15 min");
        assert_eq!(info.card.name, "B");
        assert_eq!(info.card.specialty, "Dermato");
        assert_eq!(info.card.price, "$80.5");
        assert_eq!(info.card.duration, "15 min");
    }
}
