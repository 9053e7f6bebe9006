use std::collections::BTreeSet;

use shared_models::Doctor;

/// In-memory doctor list owned by the page.
#[derive(Debug, Clone, Default)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly loaded list. There are no incremental updates.
    pub fn replace(&mut self, doctors: Vec<Doctor>) {
        self.doctors = doctors;
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Distinct specialties, case-sensitive, ascending.
    pub fn specialties(&self) -> Vec<String> {
        self.doctors
            .iter()
            .map(|d| d.specialty.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Doctors in list order; an empty filter means all of them.
    pub fn filter_by_specialty<'a>(&'a self, specialty: &'a str) -> impl Iterator<Item = &'a Doctor> + 'a {
        self.doctors
            .iter()
            .filter(move |d| specialty.is_empty() || d.specialty == specialty)
    }

    pub fn find(&self, id: i64) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }
}
