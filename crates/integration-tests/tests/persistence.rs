//! Integration tests for persistence across sessions and storage faults.

#![allow(clippy::unwrap_used)]

use ethiopia_integration_tests::{open, open_dir, run};
use ethiopia_storefront::storage::{MemoryStore, keys};
use ethiopia_storefront::ui::Region;

// =============================================================================
// Across Sessions
// =============================================================================

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = open_dir(dir.path()).unwrap();
        run(
            &mut session,
            &["add tibs", "add tibs", "favorite kitfo", "sign-in Hanna"],
        )
        .unwrap();
    }

    let session = open_dir(dir.path()).unwrap();
    assert_eq!(session.cart().line("tibs").unwrap().quantity, 2);
    assert!(session.favorites().contains("kitfo"));
    assert_eq!(session.profile().unwrap().name, "Hanna");
    assert_eq!(
        session.surface().region(Region::CartCount).map(str::trim),
        Some("2")
    );
}

#[test]
fn test_filter_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut session = open_dir(dir.path()).unwrap();
        run(&mut session, &["filter hot", "search kitfo"]).unwrap();
    }

    let session = open_dir(dir.path()).unwrap();
    assert_eq!(session.filter().search_term(), "");
    assert_eq!(session.catalog().visible(session.filter()).len(), 4);
}

#[test]
fn test_files_use_fixed_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_dir(dir.path()).unwrap();
    run(&mut session, &["add kikil", "favorite kikil"]).unwrap();

    let cart = std::fs::read_to_string(dir.path().join(format!("{}.json", keys::CART))).unwrap();
    assert_eq!(cart, r#"[{"id":"kikil","qty":1}]"#);
    let favorites =
        std::fs::read_to_string(dir.path().join(format!("{}.json", keys::FAVORITES))).unwrap();
    assert_eq!(favorites, r#"["kikil"]"#);
}

// =============================================================================
// Corrupt and Unavailable Storage
// =============================================================================

#[test]
fn test_corrupt_cart_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{}.json", keys::CART)), "{{{").unwrap();
    std::fs::write(
        dir.path().join(format!("{}.json", keys::FAVORITES)),
        r#"["tibs"]"#,
    )
    .unwrap();

    let session = open_dir(dir.path()).unwrap();
    assert!(session.cart().is_empty());
    assert!(session.favorites().contains("tibs"));
}

#[test]
fn test_negative_quantity_discards_stored_cart() {
    let store = MemoryStore::new().with_entry(keys::CART, r#"[{"id":"tibs","qty":-2}]"#);
    let session = open(store).unwrap();
    assert!(session.cart().is_empty());
}

#[test]
fn test_stored_duplicates_are_merged() {
    let store = MemoryStore::new().with_entry(
        keys::CART,
        r#"[{"id":"tibs","qty":1},{"id":"kitfo","qty":0},{"id":"tibs","qty":2}]"#,
    );
    let session = open(store).unwrap();
    assert_eq!(session.cart().lines().len(), 1);
    assert_eq!(session.cart().total_quantity(), 3);
}

#[test]
fn test_unreadable_storage_uses_defaults() {
    let mut store = MemoryStore::new().with_entry(keys::FAVORITES, r#"["kitfo"]"#);
    store.set_reject_reads(true);
    let session = open(store).unwrap();
    assert_eq!(session.favorites().count(), 0);
    assert!(session.profile().is_none());
}

#[test]
fn test_rejected_writes_keep_session_working() {
    let mut store = MemoryStore::new();
    store.set_reject_writes(true);
    let mut session = open(store).unwrap();

    run(&mut session, &["add tibs", "favorite tibs", "sign-in Hanna"]).unwrap();
    assert_eq!(session.cart().total_quantity(), 1);
    assert!(session.favorites().contains("tibs"));
    assert!(session.profile().is_none());
    assert!(session.surface().notifications().iter().all(|n| !n.contains("error")));

    let (mut store, _surface) = session.into_parts();
    store.set_reject_writes(false);
    let mut session = open(store).unwrap();
    assert!(session.cart().is_empty());
    run(&mut session, &["add kitfo"]).unwrap();
    assert_eq!(session.storage().store().get(keys::CART), Some(r#"[{"id":"kitfo","qty":1}]"#));
}
