//! Station name type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A canonical station name.
///
/// Unlike national rail networks, metro feeds have no short station codes:
/// the canonical name itself is the identifier. This type guarantees the
/// name is non-empty and carries no surrounding whitespace, so equality and
/// map lookups behave predictably.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationName;
///
/// let rajiv = StationName::parse("Rajiv Chowk").unwrap();
/// assert_eq!(rajiv.as_str(), "Rajiv Chowk");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(StationName::parse("  Hauz Khas ").unwrap().as_str(), "Hauz Khas");
///
/// // Empty input is rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }
        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationName {
    type Error = InvalidStationName;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StationName::parse(&s)
    }
}

impl From<StationName> for String {
    fn from(name: StationName) -> String {
        name.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert!(StationName::parse("Rajiv Chowk").is_ok());
        assert!(StationName::parse("Dwarka Sector - 21").is_ok());
        assert!(StationName::parse("X").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationName::parse("").is_err());
        assert!(StationName::parse(" ").is_err());
        assert!(StationName::parse("\t\n").is_err());
    }

    #[test]
    fn trims_whitespace() {
        let name = StationName::parse("  Kashmere Gate  ").unwrap();
        assert_eq!(name.as_str(), "Kashmere Gate");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationName::parse("Hauz Khas").unwrap());
        assert!(set.contains(&StationName::parse("Hauz Khas").unwrap()));
        assert!(!set.contains(&StationName::parse("Saket").unwrap()));
    }

    #[test]
    fn display() {
        let name = StationName::parse("Central Secretariat").unwrap();
        assert_eq!(format!("{}", name), "Central Secretariat");
    }

    #[test]
    fn serde_roundtrip() {
        let name = StationName::parse("Mandi House").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Mandi House\"");
        let back: StationName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn serde_rejects_blank() {
        let result: Result<StationName, _> = serde_json::from_str("\"   \"");
        assert!(result.is_err());
    }
}
