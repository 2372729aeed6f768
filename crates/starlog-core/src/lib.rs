//! starlog-core - Core library for Starlog
//!
//! This crate contains the shared models, hierarchy and profile stores,
//! and media/persistence collaborators used by the Starlog diary app's
//! presentation layers.

pub mod error;
pub mod media;
pub mod models;
pub mod persist;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use media::{LocalMediaStore, MediaRef, MediaStorage};
pub use models::{DiaryEntry, EntryId, Folder, FolderId, JournalItem, UserProfile};
pub use persist::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{JournalStore, ProfileStore};
