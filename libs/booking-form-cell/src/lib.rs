pub mod directory;
pub mod headless;
pub mod models;
pub mod page;
pub mod services;
pub mod view;

// Re-export the page-facing types for the front-ends
pub use directory::DoctorDirectory;
pub use headless::{FormField, HeadlessView};
pub use models::*;
pub use page::BookingPage;
pub use services::*;
pub use view::BookingView;
