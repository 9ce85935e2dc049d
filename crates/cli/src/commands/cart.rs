//! Cart commands.

use ethiopia_core::DishId;
use ethiopia_storefront::{Action, AppError};
use tracing::{info, warn};

use super::session::{Session, dispatch};

/// Add one of `id` and show the cart.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn add(session: &mut Session, id: &str) -> Result<(), AppError> {
    if !session.catalog().contains(id) {
        warn!(id, "not on the menu; it will not be priced");
    }
    dispatch(session, Action::Add(DishId::from(id)))?;
    show(session);
    Ok(())
}

/// Change the quantity of `id` by `delta` and show the cart.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn adjust(session: &mut Session, id: &str, delta: i32) -> Result<(), AppError> {
    if session.cart().line(id).is_none() {
        info!(id, "not in the cart");
        return Ok(());
    }
    dispatch(
        session,
        Action::Adjust {
            id: DishId::from(id),
            delta,
        },
    )?;
    show(session);
    Ok(())
}

/// Remove `id` from the cart and show the cart.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn remove(session: &mut Session, id: &str) -> Result<(), AppError> {
    dispatch(session, Action::Remove(DishId::from(id)))?;
    show(session);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn clear(session: &mut Session) -> Result<(), AppError> {
    dispatch(session, Action::ClearCart)?;
    info!("Cart cleared");
    Ok(())
}

/// Open the checkout and confirm the demo order.
///
/// # Errors
///
/// Returns [`AppError::Rejected`] when the cart is empty.
pub fn checkout(session: &mut Session) -> Result<(), AppError> {
    show(session);
    dispatch(session, Action::Checkout)?;
    dispatch(session, Action::PlaceOrder)
}

/// Log the cart lines and totals.
pub fn show(session: &Session) {
    let cart = session.cart();
    let catalog = session.catalog();

    if cart.is_empty() {
        info!("Your cart is empty. Add some dishes from the menu.");
        return;
    }

    for line in cart.lines() {
        match catalog.get(line.item_id.as_str()) {
            Some(dish) => info!(
                id = %dish.id,
                quantity = line.quantity,
                price = %dish.price,
                line_total = %dish.price.times(line.quantity),
                "{}",
                dish.name
            ),
            None => warn!(id = %line.item_id, quantity = line.quantity, "unknown dish in cart"),
        }
    }

    let totals = cart.totals(catalog);
    info!(
        items = totals.resolved_quantity,
        subtotal = %totals.subtotal,
        delivery = %totals.delivery_fee,
        total = %totals.total,
        "Cart total"
    );
}
