//! Contact form submission. Nothing is sent or stored.

/// A submitted contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    name: Option<String>,
}

impl ContactMessage {
    /// Build from the optional name field; blank means anonymous.
    #[must_use]
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_owned),
        }
    }

    /// Name to thank, `Guest` when none was given.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Guest")
    }

    /// The hint shown under the form after submission.
    #[must_use]
    pub fn acknowledgement(&self) -> String {
        format!(
            "Thank you, {}! We received your message (demo only).",
            self.display_name()
        )
    }
}
