//! Folder-or-entry union for combined listings

use serde::{Deserialize, Serialize};

use super::entry::DiaryEntry;
use super::folder::Folder;

/// One row of a folder's combined contents: either a subfolder or an entry.
///
/// Listing a folder mixes both kinds into a single sequence, so callers get
/// a tagged variant with uniform id/label accessors instead of two parallel
/// lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalItem {
    /// A subfolder row
    Folder(Folder),
    /// A diary entry row
    Entry(DiaryEntry),
}

impl JournalItem {
    /// Stable string id for list identity, regardless of variant.
    #[must_use]
    pub fn id_str(&self) -> String {
        match self {
            Self::Folder(folder) => folder.id.as_str(),
            Self::Entry(entry) => entry.id.as_str(),
        }
    }

    /// Display label: folder name or entry title.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::Entry(entry) => &entry.title,
        }
    }

    /// Whether this row is a folder.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}
