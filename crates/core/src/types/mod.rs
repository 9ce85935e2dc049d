//! Core types for ETHIOPIA.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod spice;

pub use id::DishId;
pub use price::{CurrencyCode, Price};
pub use spice::{SpiceFilter, SpiceLevel, SpiceParseError};
