//! Spice levels for dishes and the menu's spice filter.

use serde::{Deserialize, Serialize};

/// Error returned when a spice level or filter name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid spice level: {0}")]
pub struct SpiceParseError(pub String);

/// How hot a dish is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    Mild,
    Medium,
    Hot,
}

impl SpiceLevel {
    /// All levels, mildest first.
    pub const ALL: [Self; 3] = [Self::Mild, Self::Medium, Self::Hot];

    /// Capitalised label shown on menu cards (e.g. "Hot").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Medium => "Medium",
            Self::Hot => "Hot",
        }
    }

    /// Lowercase machine name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Hot => "hot",
        }
    }
}

impl std::fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpiceLevel {
    type Err = SpiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mild" => Ok(Self::Mild),
            "medium" => Ok(Self::Medium),
            "hot" => Ok(Self::Hot),
            _ => Err(SpiceParseError(s.to_owned())),
        }
    }
}

/// The spice filter selected on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpiceFilter {
    #[default]
    All,
    Mild,
    Medium,
    Hot,
}

impl SpiceFilter {
    /// Whether a dish of the given level passes this filter.
    #[must_use]
    pub const fn admits(self, level: SpiceLevel) -> bool {
        matches!(
            (self, level),
            (Self::All, _)
                | (Self::Mild, SpiceLevel::Mild)
                | (Self::Medium, SpiceLevel::Medium)
                | (Self::Hot, SpiceLevel::Hot)
        )
    }

    /// Lowercase machine name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Hot => "hot",
        }
    }
}

impl From<SpiceLevel> for SpiceFilter {
    fn from(level: SpiceLevel) -> Self {
        match level {
            SpiceLevel::Mild => Self::Mild,
            SpiceLevel::Medium => Self::Medium,
            SpiceLevel::Hot => Self::Hot,
        }
    }
}

impl std::fmt::Display for SpiceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpiceFilter {
    type Err = SpiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<SpiceLevel>().map(Self::from)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!("hot".parse::<SpiceLevel>().unwrap(), SpiceLevel::Hot);
        assert_eq!(" Medium ".parse::<SpiceLevel>().unwrap(), SpiceLevel::Medium);
        assert!("all".parse::<SpiceLevel>().is_err());
        assert!("scorching".parse::<SpiceLevel>().is_err());
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!("all".parse::<SpiceFilter>().unwrap(), SpiceFilter::All);
        assert_eq!("MILD".parse::<SpiceFilter>().unwrap(), SpiceFilter::Mild);
        assert_eq!(
            "extra".parse::<SpiceFilter>(),
            Err(SpiceParseError("extra".to_owned()))
        );
    }

    #[test]
    fn test_all_admits_every_level() {
        for level in SpiceLevel::ALL {
            assert!(SpiceFilter::All.admits(level));
        }
    }

    #[test]
    fn test_specific_filter_admits_only_its_level() {
        assert!(SpiceFilter::Hot.admits(SpiceLevel::Hot));
        assert!(!SpiceFilter::Hot.admits(SpiceLevel::Mild));
        assert!(!SpiceFilter::Mild.admits(SpiceLevel::Medium));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&SpiceLevel::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&SpiceFilter::All).unwrap(), "\"all\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(SpiceLevel::Hot.label(), "Hot");
        assert_eq!(SpiceLevel::Mild.to_string(), "mild");
    }
}
