//! Human-readable itinerary rendering.
//!
//! Pure formatting: structured steps in, a chat-ready message out. The
//! renderer never fails; a malformed (empty) itinerary renders a "no
//! route" message.

use crate::domain::{Itinerary, LineId, StationName, Step};
use crate::network::LineOrderings;
use crate::routing::RoutingConfig;

/// Message shown when an itinerary holds no route.
const NO_ROUTE_MESSAGE: &str = "❌ No route found.";

/// Renders itineraries as step-by-step chat messages.
pub struct Renderer<'a> {
    orderings: &'a LineOrderings,
    config: &'a RoutingConfig,
}

impl<'a> Renderer<'a> {
    /// Create a renderer using the given line orderings for direction hints.
    pub fn new(orderings: &'a LineOrderings, config: &'a RoutingConfig) -> Self {
        Self { orderings, config }
    }

    /// Render an itinerary into a line-delimited message.
    pub fn render(&self, itinerary: &Itinerary) -> String {
        let (Some(origin), Some(destination)) = (itinerary.origin(), itinerary.destination())
        else {
            return NO_ROUTE_MESSAGE.to_string();
        };

        let mut msg = format!("🚇 *Metro Route: {origin} ➔ {destination}*\n\n");
        let steps = itinerary.steps();

        for (i, step) in steps.iter().enumerate() {
            match step {
                Step::Start { station, line } => {
                    msg.push_str(&format!("🟢 *Start at {station}*\n"));
                    msg.push_str(&self.board_line(line, station, ride_target(steps, i)));
                }
                Step::Ride { .. } => {}
                Step::Interchange {
                    station,
                    from_line,
                    to_line,
                } => {
                    msg.push_str(&format!(
                        "🔄 *Change at {station}* ({from_line} ➔ {to_line})\n"
                    ));
                    msg.push_str(&self.board_line(to_line, station, ride_target(steps, i)));
                }
                Step::End { station, .. } => {
                    msg.push_str(&format!("🏁 *Exit at {station}*\n"));
                }
            }
        }

        let est_mins = itinerary.station_count() as i64 * self.config.hop_cost_mins;
        msg.push_str(&format!(
            "\n⏳ Est. Time: {est_mins} mins | 🛑 Stations: {}",
            itinerary.station_count()
        ));
        msg
    }

    /// The "take this line" instruction, with a direction hint when the
    /// line ordering can provide one.
    fn board_line(&self, line: &LineId, from: &StationName, to: Option<&StationName>) -> String {
        let towards = to.and_then(|to| self.orderings.towards(line, from, to));
        match towards {
            Some(terminus) => format!("   └ 🚉 Take *{line} Line* Towards {terminus}\n"),
            None => format!("   └ 🚉 Take *{line} Line*\n"),
        }
    }
}

/// The station the ride following `index` alights at, if any.
fn ride_target(steps: &[Step], index: usize) -> Option<&StationName> {
    match steps.get(index + 1) {
        Some(Step::Ride { to, .. }) => Some(to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationName;
    use crate::network::Network;
    use crate::routing::segment;

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    fn names(list: &[&str]) -> Vec<StationName> {
        list.iter().map(|s| station(s)).collect()
    }

    fn two_line_network() -> Network {
        Network::builder()
            .add_line_segment(line("Yellow"), &names(&["A", "B", "C", "D"]))
            .add_line_segment(line("Blue"), &names(&["C", "E", "F"]))
            .build()
    }

    fn orderings() -> LineOrderings {
        let mut o = LineOrderings::new();
        o.add(line("Yellow"), names(&["A", "B", "C", "D"]));
        o.add(line("Blue"), names(&["C", "E", "F"]));
        o
    }

    #[test]
    fn renders_no_route_for_empty_itinerary() {
        let orderings = LineOrderings::new();
        let config = RoutingConfig::default();
        let renderer = Renderer::new(&orderings, &config);

        assert_eq!(renderer.render(&Itinerary::empty()), "❌ No route found.");
    }

    #[test]
    fn renders_route_with_interchange() {
        let net = two_line_network();
        let orderings = orderings();
        let config = RoutingConfig::default();
        let renderer = Renderer::new(&orderings, &config);

        let itinerary = segment(&net, &names(&["A", "B", "C", "E", "F"]));
        let msg = renderer.render(&itinerary);

        assert!(msg.contains("🚇 *Metro Route: A ➔ F*"));
        assert!(msg.contains("🟢 *Start at A*"));
        assert!(msg.contains("Take *Yellow Line* Towards D"));
        assert!(msg.contains("🔄 *Change at C* (Yellow ➔ Blue)"));
        assert!(msg.contains("Take *Blue Line* Towards F"));
        assert!(msg.contains("🏁 *Exit at F*"));
        assert!(msg.contains("🛑 Stations: 5"));
        assert!(msg.contains("⏳ Est. Time: 10 mins"));
    }

    #[test]
    fn omits_direction_without_orderings() {
        let net = two_line_network();
        let empty = LineOrderings::new();
        let config = RoutingConfig::default();
        let renderer = Renderer::new(&empty, &config);

        let itinerary = segment(&net, &names(&["A", "B", "C"]));
        let msg = renderer.render(&itinerary);

        assert!(msg.contains("Take *Yellow Line*\n"));
        assert!(!msg.contains("Towards"));
    }

    #[test]
    fn single_station_route_renders() {
        let net = two_line_network();
        let orderings = orderings();
        let config = RoutingConfig::default();
        let renderer = Renderer::new(&orderings, &config);

        let itinerary = segment(&net, &names(&["C"]));
        let msg = renderer.render(&itinerary);

        assert!(msg.contains("🚇 *Metro Route: C ➔ C*"));
        assert!(msg.contains("🏁 *Exit at C*"));
    }
}
