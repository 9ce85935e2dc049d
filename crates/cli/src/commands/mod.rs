//! Subcommand implementations.
//!
//! Every command opens a [`session::Session`], turns its arguments into
//! [`Action`](ethiopia_storefront::Action)s and runs them through
//! `Storefront::dispatch`. Notifications raised by the storefront are logged.

pub mod cart;
pub mod forms;
pub mod menu;
pub mod render;
pub mod session;
pub mod shell;
