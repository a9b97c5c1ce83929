//! Location name type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid location name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location name: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// A named location in a route network.
///
/// Locations are not declared separately: any name used as an edge
/// endpoint is a location. Names are trimmed and must not be blank.
///
/// # Examples
///
/// ```
/// use route_server::domain::Location;
///
/// let tambaram = Location::parse("Tambaram").unwrap();
/// assert_eq!(tambaram.as_str(), "Tambaram");
///
/// // Surrounding whitespace is dropped
/// assert_eq!(Location::parse("  Hub B ").unwrap().as_str(), "Hub B");
///
/// // Blank names are rejected
/// assert!(Location::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// Parse a location name.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLocation {
                reason: "must not be blank",
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidLocation {
                reason: "must not contain control characters",
            });
        }

        Ok(Location(trimmed.to_string()))
    }

    /// Returns the location name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Location {
    type Error = InvalidLocation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Location::parse(&value)
    }
}

impl From<Location> for String {
    fn from(value: Location) -> Self {
        value.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any name with a visible character parses to its trimmed form
        #[test]
        fn parse_trims(s in "[ ]{0,3}[A-Za-z][A-Za-z .]{0,20}[ ]{0,3}") {
            let loc = Location::parse(&s).unwrap();
            prop_assert_eq!(loc.as_str(), s.trim());
        }

        /// Whitespace-only input is always rejected
        #[test]
        fn whitespace_rejected(s in "[ \t]{0,10}") {
            prop_assert!(Location::parse(&s).is_err());
        }
    }
}
