//! Demo forms: sign-in, booking, contact and the story dialog.

use ethiopia_storefront::ui::Region;
use ethiopia_storefront::{Action, AppError};
use tracing::info;

use super::session::{Session, dispatch};

/// Validate and save the demo profile.
///
/// # Errors
///
/// Returns [`AppError::Rejected`] for a blank name or malformed email.
pub fn sign_in(session: &mut Session, name: String, email: String) -> Result<(), AppError> {
    dispatch(session, Action::OpenSignIn)?;
    dispatch(session, Action::SaveProfile { name, email })
}

/// Request a table.
///
/// # Errors
///
/// Returns [`AppError::Rejected`] when the date or time does not parse.
pub fn book(session: &mut Session, date: String, time: String) -> Result<(), AppError> {
    dispatch(session, Action::OpenBooking)?;
    dispatch(
        session,
        Action::RequestBooking {
            date: Some(date),
            time: Some(time),
        },
    )
}

/// Submit the contact form and log the hint.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn contact(session: &mut Session, name: Option<String>) -> Result<(), AppError> {
    dispatch(session, Action::SubmitContact { name })?;
    if let Some(hint) = session.surface().region(Region::ContactHint) {
        info!("{}", hint.trim());
    }
    Ok(())
}

/// Log the restaurant's story.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn story(session: &mut Session) -> Result<(), AppError> {
    dispatch(session, Action::OpenStory)?;
    let names: Vec<&str> = session.catalog().iter().map(|d| d.name.as_str()).collect();
    info!(
        "ETHIOPIA is a modern spin on classic Ethiopian dining, inspired by family kitchens and night markets."
    );
    info!(dishes = %names.join(", "), "Signature dishes");
    Ok(())
}
