use std::cell::RefCell;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use shared_backend::BookingBackend;
use shared_models::error::DOCTOR_REQUIRED;
use shared_models::{BookingError, BookingPayload};

use crate::models::{FormFields, SubmitOutcome, SUBMIT_PROGRESS_LABEL};
use crate::services::message_bar::MessageBar;
use crate::services::synchronizer::parse_doctor_id;
use crate::view::BookingView;

/// Validates the form, posts the booking and redirects to the payment link.
pub struct BookingSubmitter<B: ?Sized> {
    backend: Arc<B>,
}

impl<B: ?Sized> Clone for BookingSubmitter<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: BookingBackend + ?Sized> BookingSubmitter<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Run one submission. The view is only borrowed before and after the
    /// request, so other events can be handled while it is pending; the
    /// disabled submit control is what turns a second click into `Ignored`.
    pub async fn submit<V: BookingView>(&self, view: &RefCell<V>) -> SubmitOutcome {
        let prepared = prepare(&mut *view.borrow_mut());
        let payload = match prepared {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };

        // Restored when the guard drops, whichever way this scope is left.
        let _control = SubmitControlGuard::engage(view);

        let result = self.backend.create_preference(&payload).await;
        let mut view = view.borrow_mut();

        match result {
            Ok(response) => match response.payment_link() {
                Some(url) => {
                    info!("Redirecting to payment checkout for doctor {}", payload.doctor_id);
                    view.navigate(url);
                    SubmitOutcome::Redirected(url.to_string())
                }
                None => {
                    let err = BookingError::MalformedResponse(
                        "preference response without init_point".to_string(),
                    );
                    error!("{}", err);
                    MessageBar::error(&mut *view, &err.user_message());
                    SubmitOutcome::Failed(err)
                }
            },
            Err(err) => {
                error!(status = ?err.status(), "Booking request failed: {}", err);
                MessageBar::error(&mut *view, &err.user_message());
                SubmitOutcome::Failed(err)
            }
        }
    }
}

/// Checks that run before anything is sent. `Err` carries the outcome of a
/// submission that stops here.
fn prepare<V: BookingView + ?Sized>(view: &mut V) -> Result<BookingPayload, SubmitOutcome> {
    if !view.submit_enabled() {
        debug!("Submit ignored, a booking request is already in flight");
        return Err(SubmitOutcome::Ignored);
    }

    MessageBar::clear(view);

    if !view.report_validity() {
        debug!("Form failed native validation, nothing sent");
        return Err(SubmitOutcome::Invalid);
    }

    let Some(doctor_id) = parse_doctor_id(&view.selected_doctor()) else {
        let err = BookingError::Validation(DOCTOR_REQUIRED.to_string());
        warn!("{}", err);
        MessageBar::error(view, &err.user_message());
        return Err(SubmitOutcome::MissingDoctor);
    };

    Ok(build_payload(&view.form_fields(), view.selected_specialty(), doctor_id))
}

/// Booking payload from the current form values. Free text is trimmed;
/// specialty, date and time are sent as the controls produce them.
pub fn build_payload(fields: &FormFields, specialty: String, doctor_id: i64) -> BookingPayload {
    BookingPayload {
        name: fields.name.trim().to_string(),
        email: fields.email.trim().to_string(),
        specialty,
        doctor_id,
        date: fields.date.clone(),
        time: fields.time.clone(),
        reason: fields.reason.trim().to_string(),
    }
}

/// Disables the submit control with a progress label while alive and puts
/// the original label back on drop. Holds no borrow in between.
struct SubmitControlGuard<'a, V: BookingView> {
    view: &'a RefCell<V>,
    original_label: String,
}

impl<'a, V: BookingView> SubmitControlGuard<'a, V> {
    fn engage(view: &'a RefCell<V>) -> Self {
        let original_label = {
            let mut control = view.borrow_mut();
            let label = control.submit_label();
            control.set_submit_control(false, SUBMIT_PROGRESS_LABEL);
            label
        };
        Self { view, original_label }
    }
}

impl<V: BookingView> Drop for SubmitControlGuard<'_, V> {
    fn drop(&mut self) {
        match self.view.try_borrow_mut() {
            Ok(mut view) => view.set_submit_control(true, &self.original_label),
            Err(_) => error!("Submit control left disabled, view busy while restoring"),
        }
    }
}
