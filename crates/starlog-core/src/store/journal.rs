//! Hierarchy store: the folder/entry tree and its invariants.
//!
//! Holds every [`Folder`] and [`DiaryEntry`] in memory and is their only
//! mutator. Two invariants are enforced across all operations: every
//! entry's `folder_id` references a live folder, and the folder parent
//! graph is acyclic.
//!
//! Change notification is pull-based: every successful mutation bumps
//! [`JournalStore::revision`], and callers re-read the accessors when the
//! number moves.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::media::MediaRef;
use crate::models::{DiaryEntry, EntryId, Folder, FolderId, JournalItem};

/// Name given to the folder created for an empty store.
pub const DEFAULT_FOLDER_NAME: &str = "Journal";

/// In-memory store for the diary's folder/entry hierarchy.
#[derive(Debug, Default)]
pub struct JournalStore {
    folders: Vec<Folder>,
    entries: Vec<DiaryEntry>,
    revision: u64,
}

impl JournalStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter bumped by every successful mutation, for change polling.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    /// Create one top-level default folder if the store holds no folders
    /// at all. Returns the new folder's id, or `None` when folders already
    /// exist. Checked by emptiness, so it can never produce a second
    /// default folder.
    pub fn ensure_default_folder(&mut self) -> Option<FolderId> {
        if !self.folders.is_empty() {
            return None;
        }
        let folder = Folder::new(DEFAULT_FOLDER_NAME, None);
        let id = folder.id;
        self.folders.push(folder);
        self.bump();
        tracing::debug!(%id, "Created default folder");
        Some(id)
    }

    // ---- lookup & filtering -------------------------------------------

    /// Look up a folder by id.
    #[must_use]
    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&DiaryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All folders with no parent.
    #[must_use]
    pub fn top_level_folders(&self) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|folder| folder.parent_id.is_none())
            .collect()
    }

    /// Direct children of the given folder.
    #[must_use]
    pub fn sub_folders(&self, of: FolderId) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|folder| folder.parent_id == Some(of))
            .collect()
    }

    /// Entries owned directly by the given folder.
    #[must_use]
    pub fn entries_in(&self, folder_id: FolderId) -> Vec<&DiaryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.folder_id == folder_id)
            .collect()
    }

    /// Entries whose category label matches exactly.
    #[must_use]
    pub fn entries_by_category(&self, category: &str) -> Vec<&DiaryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Distinct category labels across all entries, sorted for stable
    /// presentation in a category browser.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.category.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        categories.sort();
        categories
    }

    /// Combined contents of a folder, subfolders first then entries, as
    /// the tagged rows a mixed list renders from.
    #[must_use]
    pub fn items_in(&self, folder_id: FolderId) -> Vec<JournalItem> {
        let mut items: Vec<JournalItem> = self
            .sub_folders(folder_id)
            .into_iter()
            .cloned()
            .map(JournalItem::Folder)
            .collect();
        items.extend(
            self.entries_in(folder_id)
                .into_iter()
                .cloned()
                .map(JournalItem::Entry),
        );
        items
    }

    // ---- folder mutations ---------------------------------------------

    /// Create a folder. `parent`, when given, must reference an existing
    /// folder.
    pub fn add_folder(&mut self, name: impl Into<String>, parent: Option<FolderId>) -> Result<FolderId> {
        if let Some(parent) = parent {
            self.require_folder(parent)?;
        }
        let folder = Folder::new(name, parent);
        let id = folder.id;
        self.folders.push(folder);
        self.bump();
        Ok(id)
    }

    /// Rename an existing folder.
    pub fn rename_folder(&mut self, id: FolderId, name: impl Into<String>) -> Result<()> {
        let folder = self
            .folders
            .iter_mut()
            .find(|folder| folder.id == id)
            .ok_or_else(|| Error::NotFound(format!("folder {id}")))?;
        folder.name = name.into();
        self.bump();
        Ok(())
    }

    /// Move a folder under a new parent (`None` makes it top-level).
    ///
    /// Rejects any move that would create a cycle: the new parent must not
    /// be the folder itself or one of its descendants.
    pub fn reparent_folder(&mut self, id: FolderId, new_parent: Option<FolderId>) -> Result<()> {
        self.require_folder(id)?;
        if let Some(parent) = new_parent {
            self.require_folder(parent)?;
            if self.collect_subtree(id).contains(&parent) {
                return Err(Error::Validation(format!(
                    "Cannot move folder {id} under its own subtree"
                )));
            }
        }
        // Lookup again for the mutable borrow; the id was validated above.
        if let Some(folder) = self.folders.iter_mut().find(|folder| folder.id == id) {
            folder.parent_id = new_parent;
        }
        self.bump();
        Ok(())
    }

    /// Delete a folder, every descendant folder, and every entry any of
    /// them owned. Returns how many entries were purged.
    pub fn delete_folder(&mut self, id: FolderId) -> Result<usize> {
        self.require_folder(id)?;

        // Phase one: collect the doomed subtree without touching the
        // collections, so the walk never observes a half-deleted tree.
        let doomed = self.collect_subtree(id);

        // Phase two: purge entries first, then the folders themselves.
        let entries_before = self.entries.len();
        self.entries.retain(|entry| !doomed.contains(&entry.folder_id));
        let purged_entries = entries_before - self.entries.len();
        self.folders.retain(|folder| !doomed.contains(&folder.id));

        self.bump();
        tracing::debug!(
            %id,
            folders = doomed.len(),
            entries = purged_entries,
            "Cascade-deleted folder subtree"
        );
        Ok(purged_entries)
    }

    /// Ids of the given folder and all its descendants.
    ///
    /// Iterative depth-first walk over a parent-to-children index, so deep
    /// trees cannot overflow the stack and wide ones cost one pass to
    /// index instead of a scan per node.
    fn collect_subtree(&self, root: FolderId) -> HashSet<FolderId> {
        let mut children: HashMap<FolderId, Vec<FolderId>> = HashMap::new();
        for folder in &self.folders {
            if let Some(parent) = folder.parent_id {
                children.entry(parent).or_default().push(folder.id);
            }
        }

        let mut doomed = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if doomed.insert(id) {
                if let Some(kids) = children.get(&id) {
                    stack.extend(kids.iter().copied());
                }
            }
        }
        doomed
    }

    // ---- entry mutations ----------------------------------------------

    /// Create an entry in an existing folder.
    pub fn add_entry(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        folder_id: FolderId,
        image_refs: Vec<MediaRef>,
    ) -> Result<EntryId> {
        self.require_folder(folder_id)?;
        let entry = DiaryEntry::new(title, content, category, folder_id, image_refs);
        let id = entry.id;
        self.entries.push(entry);
        self.bump();
        Ok(id)
    }

    /// Replace an entry's title, content, category, and images, refreshing
    /// its last-modified stamp. Never changes `id` or `folder_id`.
    pub fn update_entry(
        &mut self,
        id: EntryId,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        image_refs: Vec<MediaRef>,
    ) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| Error::NotFound(format!("entry {id}")))?;
        entry.title = title.into();
        entry.content = content.into();
        entry.category = crate::models::normalize_category(category);
        entry.image_refs = image_refs;
        entry.touch();
        self.bump();
        Ok(())
    }

    /// Remove an entry.
    pub fn delete_entry(&mut self, id: EntryId) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Err(Error::NotFound(format!("entry {id}")));
        }
        self.bump();
        Ok(())
    }

    /// Reassign an entry to another existing folder.
    pub fn move_entry(&mut self, id: EntryId, target: FolderId) -> Result<()> {
        self.require_folder(target)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| Error::NotFound(format!("entry {id}")))?;
        entry.folder_id = target;
        self.bump();
        Ok(())
    }

    fn require_folder(&self, id: FolderId) -> Result<()> {
        if self.folder(id).is_some() {
            Ok(())
        } else {
            Err(Error::NotFound(format!("folder {id}")))
        }
    }
}
