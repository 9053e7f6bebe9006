use std::cell::RefCell;
use std::sync::Arc;

use tracing::{error, info};

use shared_backend::BookingBackend;
use shared_models::error::LOAD_DOCTORS_FAILED;
use shared_models::BookingError;

use crate::directory::DoctorDirectory;
use crate::services::message_bar::MessageBar;
use crate::services::synchronizer::SelectionSynchronizer;
use crate::view::BookingView;

/// Fetches the doctor list and fills both selectors from it.
pub struct DirectoryLoader<B: ?Sized> {
    backend: Arc<B>,
}

impl<B: ?Sized> Clone for DirectoryLoader<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: BookingBackend + ?Sized> DirectoryLoader<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Load the doctor list into `directory` and render it.
    ///
    /// On failure the directory and both selectors keep whatever they held,
    /// the message bar shows a fixed error and the underlying error is
    /// returned for the caller's bookkeeping. No retry is attempted.
    pub async fn load<V: BookingView>(
        &self,
        directory: &RefCell<DoctorDirectory>,
        view: &RefCell<V>,
    ) -> Result<usize, BookingError> {
        let result = self.backend.list_doctors().await;
        let mut view = view.borrow_mut();

        match result {
            Ok(doctors) => {
                let mut directory = directory.borrow_mut();
                directory.replace(doctors);

                view.set_specialty_options(&SelectionSynchronizer::specialty_options(&directory));
                SelectionSynchronizer::refresh_doctor_options(&directory, &mut *view);
                SelectionSynchronizer::refresh_doctor_info(&directory, &mut *view);

                info!(
                    "Loaded {} doctors across {} specialties",
                    directory.len(),
                    directory.specialties().len()
                );
                Ok(directory.len())
            }
            Err(err) => {
                error!(status = ?err.status(), "Failed to load doctors: {}", err);
                MessageBar::error(&mut *view, LOAD_DOCTORS_FAILED);
                Err(err)
            }
        }
    }
}
