//! Interchange penalty type.

use chrono::Duration;

/// Error returned for a negative interchange penalty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("interchange penalty must be non-negative, got {mins} minutes")]
pub struct InvalidPenalty {
    mins: i64,
}

/// A validated, non-negative interchange penalty in minutes.
///
/// The penalty is deliberately a bare number rather than a policy object:
/// callers decide the value (from criteria, heuristics, whatever) and the
/// path finder only needs the magnitude. Validation here keeps negative
/// costs out of the search, which Dijkstra cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InterchangePenalty(i64);

impl InterchangePenalty {
    /// Construct a penalty, rejecting negative values.
    pub fn new(mins: i64) -> Result<Self, InvalidPenalty> {
        if mins < 0 {
            return Err(InvalidPenalty { mins });
        }
        Ok(Self(mins))
    }

    /// A zero penalty: line changes cost nothing extra.
    pub fn zero() -> Self {
        Self(0)
    }

    /// The penalty in minutes.
    pub fn mins(&self) -> i64 {
        self.0
    }

    /// The penalty as a Duration.
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepted() {
        assert_eq!(InterchangePenalty::new(0).unwrap().mins(), 0);
        assert_eq!(InterchangePenalty::new(15).unwrap().mins(), 15);
    }

    #[test]
    fn negative_rejected() {
        assert!(InterchangePenalty::new(-1).is_err());
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(InterchangePenalty::zero(), InterchangePenalty::new(0).unwrap());
    }
}
