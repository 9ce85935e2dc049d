//! Demo sign-in profile.

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

/// Name and optional email remembered on this device.
///
/// Persisted as `{ "name": string, "email": string }`; a missing email is
/// stored as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name, never empty.
    pub name: String,
    /// Email address, or empty when not given.
    #[serde(default)]
    pub email: String,
}

impl UserProfile {
    /// Validate sign-in form input.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EmptyName`] when the trimmed name is empty.
    /// The email is stored trimmed, as typed.
    pub fn from_form(name: &str, email: &str) -> Result<Self, ActionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.trim().to_owned(),
        })
    }

    /// The email, if one was given.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        Some(self.email.as_str()).filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_trims() {
        let profile = UserProfile::from_form("  Hanna ", " hanna@example.com ").unwrap();
        assert_eq!(profile.name, "Hanna");
        assert_eq!(profile.email(), Some("hanna@example.com"));
    }

    #[test]
    fn test_email_is_optional() {
        let profile = UserProfile::from_form("Hanna", "").unwrap();
        assert_eq!(profile.email(), None);
        assert_eq!(
            serde_json::to_string(&profile).unwrap(),
            r#"{"name":"Hanna","email":""}"#
        );
    }

    #[test]
    fn test_rejects_blank_name() {
        assert!(matches!(
            UserProfile::from_form("   ", "a@b.c"),
            Err(ActionError::EmptyName)
        ));
    }

    #[test]
    fn test_free_form_email_is_kept() {
        let profile = UserProfile::from_form("Hanna", " hanna ").unwrap();
        assert_eq!(profile.email(), Some("hanna"));
        assert_eq!(
            serde_json::to_string(&profile).unwrap(),
            r#"{"name":"Hanna","email":"hanna"}"#
        );
    }

    #[test]
    fn test_decodes_without_email_field() {
        let profile: UserProfile = serde_json::from_str(r#"{"name":"Dawit"}"#).unwrap();
        assert_eq!(profile.email(), None);
    }
}
