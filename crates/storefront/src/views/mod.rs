//! HTML fragments rendered with askama.
//!
//! Every view is a plain display struct built from model state plus a
//! `Template` that renders it. Output is auto-escaped; only the page template
//! embeds pre-rendered fragments with `|safe`.

pub mod cart;
pub mod menu;
pub mod modal;
pub mod page;

pub use cart::{CartItemView, CartItemsTemplate, CartSummaryTemplate, CartView, CountBadgeTemplate};
pub use menu::{DishCardView, MenuGridTemplate};
pub use modal::render_modal;
pub use page::{ContactHintTemplate, FilterButtonView, PageTemplate};
