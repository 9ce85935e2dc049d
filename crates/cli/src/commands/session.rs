//! Opening a storefront session and running actions on it.

use std::path::Path;

use ethiopia_storefront::storage::FsStore;
use ethiopia_storefront::ui::RecordingSurface;
use ethiopia_storefront::{Action, AppError, Catalog, Storefront};
use tracing::{debug, info};

/// A storefront backed by files on disk, recording what it renders.
pub type Session = Storefront<FsStore, RecordingSurface>;

/// Open the session stored under `data_dir` and render the initial page.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the initial
/// render fails.
pub fn open(data_dir: &Path) -> Result<Session, AppError> {
    let store = FsStore::open(data_dir)?;
    debug!(dir = %data_dir.display(), "opened storefront data directory");

    let mut session = Storefront::new(Catalog::house(), store, RecordingSurface::new());
    session.render_all()?;
    Ok(session)
}

/// Dispatch `action` and log any notifications it raised.
///
/// Rejections have already been shown to the user as a notification, so they
/// are returned unchanged for the caller to decide on the exit status.
///
/// # Errors
///
/// Returns the dispatch error.
pub fn dispatch(session: &mut Session, action: Action) -> Result<(), AppError> {
    let result = session.dispatch(action);
    flush_notifications(session);
    if let Err(e) = &result {
        e.report();
    }
    result
}

/// Log and drain pending notifications.
pub fn flush_notifications(session: &mut Session) {
    for message in session.surface_mut().take_notifications() {
        info!("{message}");
    }
}
