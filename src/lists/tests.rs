//! Unit tests for persisted player lists

use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_add_remove_toggle_in_memory() {
    let mut list = PlayerList::in_memory(ListKind::Wishlist);
    assert!(list.is_empty());

    assert!(list.add(PlayerId::new(7)));
    assert!(!list.add(PlayerId::new(7)));
    assert!(list.contains(PlayerId::new(7)));

    assert!(!list.toggle(PlayerId::new(7)));
    assert!(list.toggle(PlayerId::new(9)));
    assert_eq!(list.ids().collect::<Vec<_>>(), vec![PlayerId::new(9)]);

    assert!(list.remove(PlayerId::new(9)));
    assert!(!list.remove(PlayerId::new(9)));
    assert_eq!(list.len(), 0);
    assert!(list.path().is_none());
}

#[test]
fn test_list_survives_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lists").join("guillotine.json");

    let mut list = PlayerList::load(ListKind::Guillotine, &path);
    list.add(PlayerId::new(3));
    list.add(PlayerId::new(1));

    let reloaded = PlayerList::load(ListKind::Guillotine, &path);
    assert_eq!(
        reloaded.ids().collect::<Vec<_>>(),
        vec![PlayerId::new(1), PlayerId::new(3)]
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1,3]");
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wishlist.json");
    fs::write(&path, "{not json").unwrap();

    let list = PlayerList::load(ListKind::Wishlist, &path);
    assert!(list.is_empty());
}

#[test]
fn test_unwritable_path_keeps_working_in_memory() {
    let dir = tempdir().unwrap();
    // A file where the parent directory should be makes every write fail.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    let path = blocker.join("wishlist.json");

    let mut list = PlayerList::load(ListKind::Wishlist, &path);
    assert!(list.add(PlayerId::new(11)));
    assert!(list.contains(PlayerId::new(11)));
    assert!(!path.exists());
}

#[test]
fn test_list_kind_names() {
    assert_eq!(ListKind::Wishlist.file_name(), "wishlist.json");
    assert!(ListKind::Guillotine
        .default_path()
        .ends_with("fpl-planner/guillotine.json"));
    assert_eq!(ListKind::Wishlist.to_string(), "Wishlist");
}
