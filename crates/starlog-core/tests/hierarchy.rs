//! End-to-end scenarios across the stores and media storage.

use pretty_assertions::assert_eq;
use starlog_core::{
    JournalStore, LocalMediaStore, MediaStorage, MemoryStorage, ProfileStore,
};

#[test]
fn default_folder_subfolder_and_cascade_scenario() {
    let mut journal = JournalStore::new();
    let root = journal.ensure_default_folder().unwrap();
    assert!(journal.ensure_default_folder().is_none());

    let sub = journal.add_folder("Trip", Some(root)).unwrap();
    let e1 = journal
        .add_entry("Day1", "Landed, checked in, slept.", "travel", sub, vec![])
        .unwrap();
    assert_eq!(journal.entries_in(sub).len(), 1);

    journal.delete_folder(sub).unwrap();

    let top: Vec<_> = journal.top_level_folders().iter().map(|f| f.id).collect();
    assert_eq!(top, vec![root]);
    assert!(journal.entries_in(sub).is_empty());
    assert!(journal.entry(e1).is_none());
    assert!(journal.entries_by_category("travel").is_empty());
}

#[test]
fn media_import_flows_into_an_entry() {
    let dir = tempfile::tempdir().unwrap();
    let media = LocalMediaStore::new(dir.path()).unwrap();
    let picture = media.store(b"\x89PNG...", "png").unwrap();

    let mut journal = JournalStore::new();
    let root = journal.ensure_default_folder().unwrap();
    let id = journal
        .add_entry("With photo", "...", "travel", root, vec![picture.clone()])
        .unwrap();

    assert_eq!(journal.entry(id).unwrap().image_refs, vec![picture]);
}

#[test]
fn account_lifecycle_end_to_end() {
    let mut profiles = ProfileStore::new(MemoryStorage::new());

    profiles.register("a@x.com", "pw", None).unwrap();
    assert!(profiles.login("a@x.com", "pw").is_ok());
    assert!(profiles.login("a@x.com", "wrong").is_err());

    profiles.change_password("pw", "pw2").unwrap();
    assert!(profiles.login("a@x.com", "pw").is_err());
    assert!(profiles.login("a@x.com", "pw2").is_ok());

    profiles.logout().unwrap();
    assert!(profiles.current().is_none());
    assert!(profiles.login("a@x.com", "pw2").is_err());
}

#[test]
fn entries_never_dangle_across_mixed_mutations() {
    let mut journal = JournalStore::new();
    let root = journal.ensure_default_folder().unwrap();
    let a = journal.add_folder("A", Some(root)).unwrap();
    let b = journal.add_folder("B", Some(root)).unwrap();
    let b1 = journal.add_folder("B1", Some(b)).unwrap();

    let in_a = journal.add_entry("a", "...", "x", a, vec![]).unwrap();
    let in_b1 = journal.add_entry("b1", "...", "x", b1, vec![]).unwrap();
    journal.move_entry(in_a, b1).unwrap();
    journal.delete_folder(b).unwrap();

    // Both the moved entry and the native one went down with B's subtree.
    assert!(journal.entry(in_a).is_none());
    assert!(journal.entry(in_b1).is_none());
    assert!(journal.folder(a).is_some());
    assert!(journal.entries_in(a).is_empty());
    assert_eq!(journal.categories(), Vec::<String>::new());
}
