pub mod loader;
pub mod message_bar;
pub mod submitter;
pub mod synchronizer;

pub use loader::DirectoryLoader;
pub use message_bar::MessageBar;
pub use submitter::BookingSubmitter;
pub use synchronizer::{parse_doctor_id, SelectionSynchronizer};
