//! ETHIOPIA Core - Shared types library.
//!
//! This crate provides common types used across all ETHIOPIA components:
//! - `storefront` - Menu, cart, favorites and rendering for the ordering app
//! - `cli` - Terminal front end driving the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for dish IDs, prices and spice levels

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
