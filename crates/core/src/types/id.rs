//! Newtype IDs for type-safe catalog references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a dish in the catalog (e.g. `"doro-wot"`).
///
/// IDs are stable slugs. They are compared verbatim; no normalisation
/// is applied, so `"Tibs"` and `"tibs"` are different dishes.
///
/// # Example
///
/// ```rust
/// # use ethiopia_core::DishId;
/// let id = DishId::from("tibs");
/// assert_eq!(id.as_str(), "tibs");
/// assert_eq!(id.to_string(), "tibs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(String);

impl DishId {
    /// Create a new ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<DishId> for String {
    fn from(id: DishId) -> Self {
        id.0
    }
}

impl AsRef<str> for DishId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for DishId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
