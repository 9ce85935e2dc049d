//! Cart drawer views: line items, summary and header badges.

use askama::Template;

use crate::cart::Cart;
use crate::catalog::Catalog;

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    /// Image path; empty when the dish has no picture.
    pub image: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_label: String,
    pub subtotal: String,
    pub delivery_fee: String,
    pub total: String,
}

impl CartView {
    /// Build the view of `cart`, skipping lines missing from `catalog`.
    #[must_use]
    pub fn new(cart: &Cart, catalog: &Catalog) -> Self {
        let items = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let dish = catalog.get(line.item_id.as_str())?;
                Some(CartItemView {
                    id: dish.id.to_string(),
                    name: dish.name.clone(),
                    quantity: line.quantity,
                    price: dish.price.display(),
                    line_price: dish.price.times(line.quantity).display(),
                    image: dish.image.clone(),
                })
            })
            .collect();
        let totals = cart.totals(catalog);

        Self {
            items,
            item_label: item_label(totals.resolved_quantity),
            subtotal: totals.subtotal.display(),
            delivery_fee: totals.delivery_fee.display(),
            total: totals.total.display(),
        }
    }

    /// Whether there are no lines to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Drawer sub-heading for `count` items.
#[must_use]
pub fn item_label(count: u32) -> String {
    match count {
        0 => "0 items".to_string(),
        1 => "1 item in cart".to_string(),
        n => format!("{n} items in cart"),
    }
}

/// Cart lines fragment.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
}

/// Cart summary fragment.
#[derive(Template)]
#[template(path = "partials/cart_summary.html")]
pub struct CartSummaryTemplate<'a> {
    pub cart: &'a CartView,
}

/// Header count badge fragment.
#[derive(Template)]
#[template(path = "partials/count_badge.html")]
pub struct CountBadgeTemplate {
    pub count: usize,
}
