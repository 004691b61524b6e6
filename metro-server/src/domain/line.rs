//! Line identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The placeholder used wherever line metadata is missing.
///
/// Merged transit feeds routinely lack line membership for some stations;
/// routing and rendering degrade to this label instead of failing.
const UNKNOWN_LINE: &str = "Unknown";

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A transit line identifier, e.g. `"Yellow"` or `"Blue"`.
///
/// A station served by more than one line is a potential interchange point.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Parse a line identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }
        Ok(LineId(trimmed.to_string()))
    }

    /// The placeholder line used when metadata is missing.
    pub fn unknown() -> Self {
        LineId(UNKNOWN_LINE.to_string())
    }

    /// Returns true if this is the missing-metadata placeholder.
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_LINE
    }

    /// Returns the line identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineId {
    type Error = InvalidLineId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        LineId::parse(&s)
    }
}

impl From<LineId> for String {
    fn from(line: LineId) -> String {
        line.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert!(LineId::parse("Yellow").is_ok());
        assert!(LineId::parse("Aqua").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(LineId::parse("").is_err());
        assert!(LineId::parse("  ").is_err());
    }

    #[test]
    fn unknown_placeholder() {
        let line = LineId::unknown();
        assert!(line.is_unknown());
        assert_eq!(line.as_str(), "Unknown");
        assert!(!LineId::parse("Yellow").unwrap().is_unknown());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let blue = LineId::parse("Blue").unwrap();
        let yellow = LineId::parse("Yellow").unwrap();
        assert!(blue < yellow);
    }
}
