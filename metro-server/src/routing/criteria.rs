//! Routing criteria.

use std::fmt;
use std::str::FromStr;

use super::config::RoutingConfig;
use super::penalty::{InterchangePenalty, InvalidPenalty};

/// Words in a message that indicate the rider wants fewer line changes.
const COMFORT_KEYWORDS: &[&str] = &["exchange", "interchange", "change", "comfort", "easy"];

/// Error returned when parsing an unrecognized criteria string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown routing criteria: {value} (expected 'fastest' or 'comfort')")]
pub struct InvalidCriteria {
    value: String,
}

/// Which objective the route search optimizes.
///
/// Not stored anywhere: each request carries its own criteria, which maps
/// to a single numeric penalty before the search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingCriteria {
    /// Minimize total travel time; line changes are cheap.
    #[default]
    Fastest,

    /// Minimize line changes; an interchange costs as much as several
    /// extra stations.
    Comfort,
}

impl RoutingCriteria {
    /// The interchange penalty this criteria maps to under `config`.
    ///
    /// Fails only when the configuration carries a negative penalty.
    pub fn penalty(self, config: &RoutingConfig) -> Result<InterchangePenalty, InvalidPenalty> {
        let mins = match self {
            RoutingCriteria::Fastest => config.fastest_penalty_mins,
            RoutingCriteria::Comfort => config.comfort_penalty_mins,
        };
        InterchangePenalty::new(mins)
    }

    /// Detect the criteria from a free-text message.
    ///
    /// Riders asking for "minimum interchange" or an "easy" route get
    /// comfort mode; everything else defaults to fastest.
    pub fn from_message(text: &str) -> Self {
        let lower = text.to_lowercase();
        if COMFORT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            RoutingCriteria::Comfort
        } else {
            RoutingCriteria::Fastest
        }
    }
}

impl FromStr for RoutingCriteria {
    type Err = InvalidCriteria;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fastest" => Ok(RoutingCriteria::Fastest),
            "comfort" => Ok(RoutingCriteria::Comfort),
            other => Err(InvalidCriteria {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for RoutingCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingCriteria::Fastest => f.write_str("fastest"),
            RoutingCriteria::Comfort => f.write_str("comfort"),
        }
    }
}
