use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, info};

use shared_backend::BookingBackend;
use shared_models::BookingError;

use crate::directory::DoctorDirectory;
use crate::models::{PageEvent, PagePhase, SubmitOutcome};
use crate::services::{BookingSubmitter, DirectoryLoader, SelectionSynchronizer};
use crate::view::BookingView;

/// Page controller for the booking form.
///
/// Owns the doctor directory and the view for one page session. Handles are
/// cheap to clone and share the same state, so an event loop can dispatch a
/// new event while an earlier handler is still waiting on the network.
/// Borrows of the view and directory never span a network call.
pub struct BookingPage<V: BookingView> {
    view: Rc<RefCell<V>>,
    directory: Rc<RefCell<DoctorDirectory>>,
    phase: Rc<Cell<PagePhase>>,
    loader: DirectoryLoader<dyn BookingBackend>,
    submitter: BookingSubmitter<dyn BookingBackend>,
}

impl<V: BookingView> Clone for BookingPage<V> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
            directory: Rc::clone(&self.directory),
            phase: Rc::clone(&self.phase),
            loader: self.loader.clone(),
            submitter: self.submitter.clone(),
        }
    }
}

impl<V: BookingView> BookingPage<V> {
    pub fn new(backend: Arc<dyn BookingBackend>, view: V) -> Self {
        Self {
            view: Rc::new(RefCell::new(view)),
            directory: Rc::new(RefCell::new(DoctorDirectory::new())),
            phase: Rc::new(Cell::new(PagePhase::Unloaded)),
            loader: DirectoryLoader::new(backend.clone()),
            submitter: BookingSubmitter::new(backend),
        }
    }

    /// Dispatch one page event. Only submissions produce an outcome.
    pub async fn handle(&self, event: PageEvent) -> Option<SubmitOutcome> {
        debug!("Handling page event {:?}", event);

        match event {
            PageEvent::Ready => {
                // Failures are already reported on the message bar.
                let _ = self.on_ready().await;
                None
            }
            PageEvent::SpecialtyChanged => {
                self.on_specialty_changed();
                None
            }
            PageEvent::DoctorChanged => {
                self.on_doctor_changed();
                None
            }
            PageEvent::SubmitClicked | PageEvent::FormSubmitted => Some(self.submit().await),
        }
    }

    pub async fn on_ready(&self) -> Result<usize, BookingError> {
        let result = self.loader.load(&self.directory, &self.view).await;

        self.phase.set(match result {
            Ok(_) => PagePhase::Loaded,
            Err(_) => PagePhase::LoadFailed,
        });
        info!("Booking page is now {:?}", self.phase.get());

        result
    }

    pub fn on_specialty_changed(&self) {
        let directory = self.directory.borrow();
        let mut view = self.view.borrow_mut();
        SelectionSynchronizer::refresh_doctor_options(&directory, &mut *view);
        SelectionSynchronizer::refresh_doctor_info(&directory, &mut *view);
    }

    pub fn on_doctor_changed(&self) {
        let directory = self.directory.borrow();
        SelectionSynchronizer::refresh_doctor_info(&directory, &mut *self.view.borrow_mut());
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.submitter.submit(&self.view).await
    }

    pub fn phase(&self) -> PagePhase {
        self.phase.get()
    }

    pub fn directory(&self) -> Ref<'_, DoctorDirectory> {
        self.directory.borrow()
    }

    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub fn view_mut(&self) -> RefMut<'_, V> {
        self.view.borrow_mut()
    }
}
