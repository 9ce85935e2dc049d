//! Integration tests for the ETHIOPIA storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ethiopia-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart operations end to end through `Storefront::dispatch`
//! - `favorites_and_filter` - Favorites, spice filter and search
//! - `forms` - Sign-in, booking, checkout and contact
//! - `persistence` - Restoring state from disk and surviving storage faults
//!
//! Sessions here always run against the house catalog and a
//! [`RecordingSurface`], so tests observe exactly what a user would see.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use ethiopia_storefront::storage::{FsStore, KeyValueStore, MemoryStore};
use ethiopia_storefront::ui::RecordingSurface;
use ethiopia_storefront::{Action, Catalog, Result, Storefront};

/// A storefront session used by tests.
pub type TestSession<S> = Storefront<S, RecordingSurface>;

/// Open a rendered session over `store`.
///
/// # Errors
///
/// Returns an error if the initial render fails.
pub fn open<S: KeyValueStore>(store: S) -> Result<TestSession<S>> {
    let mut session = Storefront::new(Catalog::house(), store, RecordingSurface::new());
    session.render_all()?;
    Ok(session)
}

/// Open a rendered session over an empty in-memory store.
///
/// # Errors
///
/// Returns an error if the initial render fails.
pub fn open_memory() -> Result<TestSession<MemoryStore>> {
    open(MemoryStore::new())
}

/// Open a rendered session stored under `dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the initial
/// render fails.
pub fn open_dir(dir: &Path) -> Result<TestSession<FsStore>> {
    open(FsStore::open(dir)?)
}

/// Parse and dispatch each line in order, stopping at the first error.
///
/// # Errors
///
/// Returns the first parse or dispatch error.
pub fn run<S: KeyValueStore>(session: &mut TestSession<S>, lines: &[&str]) -> Result<()> {
    for line in lines {
        let action: Action = line.parse()?;
        session.dispatch(action)?;
    }
    Ok(())
}
