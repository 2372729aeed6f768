//! Diary entry model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::media::MediaRef;
use crate::util::unix_timestamp_ms_now;

use super::folder::FolderId;

/// Fallback category applied when the caller passes an empty label.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// A unique identifier for a diary entry, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new unique entry ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A single user-authored diary record.
///
/// `date` is a last-modified stamp (Unix ms): set at creation and refreshed
/// by every content update. Every entry belongs to exactly one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Unique identifier, immutable after creation
    pub id: EntryId,
    /// Entry title
    pub title: String,
    /// Free-text body
    pub content: String,
    /// Last-modified timestamp (Unix ms)
    pub date: i64,
    /// Grouping label, not a foreign key
    pub category: String,
    /// Owning folder
    pub folder_id: FolderId,
    /// Ordered references to stored images
    pub image_refs: Vec<MediaRef>,
}

impl DiaryEntry {
    /// Create a new entry with a freshly generated id and a current
    /// timestamp. An empty `category` falls back to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        folder_id: FolderId,
        image_refs: Vec<MediaRef>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            title: title.into(),
            content: content.into(),
            date: unix_timestamp_ms_now(),
            category: normalize_category(category),
            folder_id,
            image_refs,
        }
    }

    /// Refresh the last-modified stamp.
    ///
    /// Two touches inside the same millisecond still advance `date`, so
    /// "updated" is always strictly later than what was there before.
    pub fn touch(&mut self) {
        self.date = unix_timestamp_ms_now().max(self.date + 1);
    }
}

pub(crate) fn normalize_category(category: impl Into<String>) -> String {
    let category = category.into().trim().to_string();
    if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category
    }
}
