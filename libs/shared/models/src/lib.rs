pub mod booking;
pub mod doctor;
pub mod error;

pub use booking::{ApiErrorBody, BookingPayload, PreferenceResponse};
pub use doctor::Doctor;
pub use error::BookingError;
