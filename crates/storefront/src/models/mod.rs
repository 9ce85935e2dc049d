//! Domain models for the demo forms.
//!
//! These types represent validated form input, separate from the raw strings
//! a surface hands to the controller.

pub mod booking;
pub mod contact;
pub mod profile;

pub use booking::BookingSlot;
pub use contact::ContactMessage;
pub use profile::UserProfile;
