//! ETHIOPIA storefront library.
//!
//! A single-user restaurant ordering session: fixed menu, cart, favorites,
//! spice filter and search, demo sign-in, booking and checkout. State lives
//! in memory and is persisted through a key-value store; every change is
//! re-rendered as HTML fragments onto a [`ui::Surface`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod filters;
pub mod models;
pub mod storage;
pub mod telemetry;
pub mod ui;
pub mod views;

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, Dish};
pub use error::{ActionError, AppError, Result};
pub use favorites::Favorites;
pub use filter::FilterState;
pub use ui::{Action, Storefront};
