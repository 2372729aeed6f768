//! Stores owning the application state

mod journal;
mod profile;

pub use journal::{JournalStore, DEFAULT_FOLDER_NAME};
pub use profile::{ProfileStore, PROFILE_KEY};
