//! Menu and favorites commands.

use ethiopia_core::{DishId, SpiceFilter};
use ethiopia_storefront::{Action, AppError};
use tracing::info;

use super::session::{Session, dispatch};

/// Apply the filter and log the visible dishes.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn list(session: &mut Session, spice: SpiceFilter, search: Option<&str>) -> Result<(), AppError> {
    dispatch(session, Action::Filter(spice))?;
    dispatch(session, Action::Search(search.unwrap_or_default().to_string()))?;

    let visible = session.catalog().visible(session.filter());
    if visible.is_empty() {
        info!("No dishes match your search. Try clearing filters.");
        return Ok(());
    }

    for dish in visible {
        info!(
            id = %dish.id,
            price = %dish.price,
            spice = dish.spice.label(),
            badge = %dish.badge,
            favorite = session.favorites().contains(dish.id.as_str()),
            "{}",
            dish.name
        );
    }
    Ok(())
}

/// Toggle `id` as favorite.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn toggle_favorite(session: &mut Session, id: &str) -> Result<(), AppError> {
    dispatch(session, Action::ToggleFavorite(DishId::from(id)))?;
    if session.favorites().contains(id) {
        info!(id, count = session.favorites().count(), "Added to favorites");
    } else {
        info!(id, count = session.favorites().count(), "Removed from favorites");
    }
    Ok(())
}

/// Log the favorite dishes that are on the menu.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn favorites(session: &mut Session) -> Result<(), AppError> {
    dispatch(session, Action::ShowFavorites)?;

    let favorites = session.favorites();
    let listed: Vec<_> = session
        .catalog()
        .iter()
        .filter(|d| favorites.contains(d.id.as_str()))
        .collect();

    if favorites.is_empty() {
        info!("You have no favorites yet.");
    }
    for dish in listed {
        info!(id = %dish.id, price = %dish.price, "{}", dish.name);
    }
    Ok(())
}
