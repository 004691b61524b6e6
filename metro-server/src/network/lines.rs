//! End-to-end line orderings.
//!
//! Each line's stations in track order, used to tell the rider which
//! terminus to head towards ("Take the Yellow Line Towards Huda City
//! Centre"). The ordering is presentation data: routing never consults it.

use std::collections::HashMap;

use crate::domain::{LineId, StationName};

/// Station order along each line, from one terminus to the other.
#[derive(Debug, Clone, Default)]
pub struct LineOrderings {
    orders: HashMap<LineId, Vec<StationName>>,
}

impl LineOrderings {
    /// Create an empty set of orderings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the station order for a line.
    pub fn add(&mut self, line: LineId, stations: Vec<StationName>) {
        self.orders.insert(line, stations);
    }

    /// The terminus a rider at `from` heads towards to reach `to`.
    ///
    /// Returns `None` when the line has no recorded order or either
    /// station is not on it; the renderer then omits the direction hint.
    pub fn towards(&self, line: &LineId, from: &StationName, to: &StationName) -> Option<&StationName> {
        let order = self.orders.get(line)?;
        let idx_from = order.iter().position(|s| s == from)?;
        let idx_to = order.iter().position(|s| s == to)?;
        if idx_to > idx_from {
            order.last()
        } else {
            order.first()
        }
    }

    /// Returns true if no orderings are recorded.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
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

    fn yellow_order() -> LineOrderings {
        let mut orderings = LineOrderings::new();
        orderings.add(
            line("Yellow"),
            vec![
                station("Samaypur Badli"),
                station("Kashmere Gate"),
                station("Rajiv Chowk"),
                station("Hauz Khas"),
                station("Huda City Centre"),
            ],
        );
        orderings
    }

    #[test]
    fn towards_far_terminus() {
        let orderings = yellow_order();
        assert_eq!(
            orderings.towards(&line("Yellow"), &station("Rajiv Chowk"), &station("Hauz Khas")),
            Some(&station("Huda City Centre"))
        );
    }

    #[test]
    fn towards_near_terminus() {
        let orderings = yellow_order();
        assert_eq!(
            orderings.towards(&line("Yellow"), &station("Rajiv Chowk"), &station("Kashmere Gate")),
            Some(&station("Samaypur Badli"))
        );
    }

    #[test]
    fn unknown_line_or_station_gives_none() {
        let orderings = yellow_order();
        assert_eq!(
            orderings.towards(&line("Blue"), &station("Rajiv Chowk"), &station("Hauz Khas")),
            None
        );
        assert_eq!(
            orderings.towards(&line("Yellow"), &station("Rajiv Chowk"), &station("Dwarka")),
            None
        );
    }
}
