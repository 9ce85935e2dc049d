//! Unified error handling with Sentry integration.
//!
//! User-input rejections ([`ActionError`]) are expected and only shown to the
//! user. Everything else is wrapped in [`AppError`], which reports the
//! unexpected kinds to Sentry before they propagate.

use thiserror::Error;

use crate::storage::StorageError;
use crate::ui::ParseActionError;

/// A user action rejected by input validation.
///
/// The display text is the message shown to the user.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Sign-in without a name.
    #[error("Please enter your name.")]
    EmptyName,

    /// Booking without both a date and a time.
    #[error("Please choose both a date and time.")]
    MissingBookingSlot,

    /// Booking with a date or time that does not parse.
    #[error("Please choose a valid date and time (could not read \"{0}\").")]
    InvalidBookingSlot(String),

    /// Checkout or order placement with nothing in the cart.
    #[error("Your cart is empty.")]
    EmptyCart,
}

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The action was rejected; the user has already been notified.
    #[error("Rejected: {0}")]
    Rejected(#[from] ActionError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// The storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// An action line could not be parsed.
    #[error("Invalid action: {0}")]
    Parse(#[from] ParseActionError),
}

impl AppError {
    /// Whether this is an ordinary input rejection rather than a fault.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Parse(_))
    }

    /// Log the error and capture faults to Sentry.
    pub fn report(&self) {
        if self.is_rejection() {
            tracing::debug!(error = %self, "action rejected");
            return;
        }
        let event_id = sentry::capture_error(self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Storefront error"
        );
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "add", Some(&[("id", "tibs")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
