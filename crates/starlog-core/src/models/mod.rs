//! Data models for Starlog

mod entry;
mod folder;
mod item;
mod profile;

pub(crate) use entry::normalize_category;
pub use entry::{DiaryEntry, EntryId, DEFAULT_CATEGORY};
pub use folder::{Folder, FolderId};
pub use item::JournalItem;
pub use profile::UserProfile;
