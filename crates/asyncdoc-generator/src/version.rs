//! Target AsyncAPI version and the placement rules it selects.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerateError;

/// AsyncAPI version used when the caller does not request one.
pub const DEFAULT_ASYNCAPI_VERSION: &str = "2.6.0";

/// Where `tags` and `externalDocs` attach in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// AsyncAPI 2.x: document root.
    TopLevel,
    /// AsyncAPI 3.x and later: under `info`.
    UnderInfo,
}

/// A requested AsyncAPI version string with its parsed major component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecVersion {
    raw: String,
    major: u64,
}

impl SpecVersion {
    /// Parse a version string such as `2.6.0` or `3.0.0`.
    ///
    /// Only the major component is interpreted; it must be 2 or later.
    pub fn parse(raw: &str) -> Result<Self, GenerateError> {
        let raw = raw.trim();
        let major = raw
            .split('.')
            .next()
            .and_then(|m| m.parse::<u64>().ok())
            .filter(|m| *m >= 2)
            .ok_or_else(|| GenerateError::UnsupportedVersion(raw.to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            major,
        })
    }

    /// The version string as requested.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The major version number.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The placement mode for this major version.
    pub fn placement(&self) -> Placement {
        match self.major {
            2 => Placement::TopLevel,
            _ => Placement::UnderInfo,
        }
    }
}

impl Default for SpecVersion {
    fn default() -> Self {
        Self {
            raw: DEFAULT_ASYNCAPI_VERSION.to_string(),
            major: 2,
        }
    }
}

impl FromStr for SpecVersion {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_2_6_0() {
        let version = SpecVersion::default();
        assert_eq!(version.as_str(), "2.6.0");
        assert_eq!(version.major(), 2);
        assert_eq!(version.placement(), Placement::TopLevel);
        assert_eq!(SpecVersion::parse(DEFAULT_ASYNCAPI_VERSION).unwrap(), version);
    }

    #[test]
    fn major_3_places_under_info() {
        for raw in ["3.0.0", "3.0.1", "3.0.2", "3"] {
            let version = SpecVersion::parse(raw).unwrap();
            assert_eq!(version.major(), 3);
            assert_eq!(version.placement(), Placement::UnderInfo);
        }
    }

    #[test]
    fn later_majors_place_under_info() {
        let version: SpecVersion = "4.1.0".parse().unwrap();
        assert_eq!(version.placement(), Placement::UnderInfo);
    }

    #[test]
    fn keeps_raw_string() {
        let version = SpecVersion::parse(" 2.4.0 ").unwrap();
        assert_eq!(version.as_str(), "2.4.0");
        assert_eq!(version.to_string(), "2.4.0");
    }

    #[test]
    fn reject_unusable_versions() {
        for raw in ["", "1.2.0", "0.9", "latest", "v3.0.0", ".1"] {
            assert!(
                matches!(
                    SpecVersion::parse(raw),
                    Err(GenerateError::UnsupportedVersion(_))
                ),
                "expected '{}' to be rejected",
                raw
            );
        }
    }
}
