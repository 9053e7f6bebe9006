pub mod mediturnos;

use async_trait::async_trait;

use shared_models::{BookingError, BookingPayload, Doctor, PreferenceResponse};

pub use mediturnos::MediturnosClient;

pub const DOCTORS_PATH: &str = "/api/medicos";
pub const PREFERENCE_PATH: &str = "/api/crear-preferencia";

/// The two backend calls the booking page depends on.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, BookingError>;

    async fn create_preference(
        &self,
        payload: &BookingPayload,
    ) -> Result<PreferenceResponse, BookingError>;
}
