//! Itinerary types.
//!
//! An `Itinerary` is the structured, step-by-step form of a computed route:
//! a start step, alternating ride/interchange steps, and an end step. It is
//! computed fresh for every request and never persisted.

use super::{LineId, StationName};

/// A single step of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Board at the origin station on the given line.
    Start {
        station: StationName,
        line: LineId,
    },

    /// Ride the current line to `to`, passing `stops` hops.
    Ride { to: StationName, stops: usize },

    /// Change lines at `station`, leaving `from_line` and boarding `to_line`.
    Interchange {
        station: StationName,
        from_line: LineId,
        to_line: LineId,
    },

    /// Alight at the final station, arriving on the given line.
    End {
        station: StationName,
        line: LineId,
    },
}

impl Step {
    /// Returns true if this is an interchange step.
    pub fn is_interchange(&self) -> bool {
        matches!(self, Step::Interchange { .. })
    }
}

/// A structured route, ready for rendering.
///
/// # Invariants
///
/// A non-empty itinerary begins with `Start` and finishes with `End`;
/// every `Interchange` is preceded by the `Ride` that reaches it. The
/// empty itinerary (no steps, zero stations) stands for "no route".
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    steps: Vec<Step>,
    station_count: usize,
}

impl Itinerary {
    /// The empty itinerary, rendered as "no route".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Construct an itinerary from steps covering `station_count` stations.
    pub(crate) fn new(steps: Vec<Step>, station_count: usize) -> Self {
        Self {
            steps,
            station_count,
        }
    }

    /// The ordered steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of stations on the route, endpoints included.
    pub fn station_count(&self) -> usize {
        self.station_count
    }

    /// Returns true if this itinerary holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The origin station, if the itinerary is non-empty.
    pub fn origin(&self) -> Option<&StationName> {
        match self.steps.first() {
            Some(Step::Start { station, .. }) => Some(station),
            _ => None,
        }
    }

    /// The destination station, if the itinerary is non-empty.
    pub fn destination(&self) -> Option<&StationName> {
        match self.steps.last() {
            Some(Step::End { station, .. }) => Some(station),
            _ => None,
        }
    }

    /// Number of line changes on the route.
    pub fn interchange_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_interchange()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    #[test]
    fn empty_itinerary() {
        let it = Itinerary::empty();
        assert!(it.is_empty());
        assert_eq!(it.station_count(), 0);
        assert_eq!(it.interchange_count(), 0);
        assert!(it.origin().is_none());
        assert!(it.destination().is_none());
    }

    #[test]
    fn accessors() {
        let it = Itinerary::new(
            vec![
                Step::Start {
                    station: station("A"),
                    line: line("Yellow"),
                },
                Step::Ride {
                    to: station("C"),
                    stops: 2,
                },
                Step::Interchange {
                    station: station("C"),
                    from_line: line("Yellow"),
                    to_line: line("Blue"),
                },
                Step::Ride {
                    to: station("F"),
                    stops: 2,
                },
                Step::End {
                    station: station("F"),
                    line: line("Blue"),
                },
            ],
            5,
        );

        assert!(!it.is_empty());
        assert_eq!(it.origin(), Some(&station("A")));
        assert_eq!(it.destination(), Some(&station("F")));
        assert_eq!(it.interchange_count(), 1);
        assert_eq!(it.station_count(), 5);
    }
}
