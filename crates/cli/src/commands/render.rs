//! Full page rendering.

use std::io::Write;
use std::path::Path;

use tracing::info;

use super::session::Session;

/// Write the rendered page to `out`, or to stdout when `None`.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn page(session: &Session, out: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let html = session.render_page()?;
    match out {
        Some(path) => {
            std::fs::write(path, &html)?;
            info!(path = %path.display(), bytes = html.len(), "Page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
