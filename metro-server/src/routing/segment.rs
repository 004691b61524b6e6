//! Itinerary segmentation.
//!
//! Converts a raw station sequence into typed steps by detecting line
//! discontinuities along the path. Pure function of its inputs.

use crate::domain::{Itinerary, StationName, Step};
use crate::network::Network;

/// Segment a path into a structured itinerary.
///
/// For each interior station the line arriving (common line of the previous
/// pair) is compared with the line leaving (common line of the next pair);
/// a mismatch emits an interchange step. Stations where the line continues
/// produce no step of their own. An empty path yields the empty itinerary.
pub fn segment(network: &Network, path: &[StationName]) -> Itinerary {
    let Some(first) = path.first() else {
        return Itinerary::empty();
    };

    if path.len() == 1 {
        let line = network.primary_line(first);
        return Itinerary::new(
            vec![
                Step::Start {
                    station: first.clone(),
                    line: line.clone(),
                },
                Step::End {
                    station: first.clone(),
                    line,
                },
            ],
            1,
        );
    }

    let mut steps = Vec::new();
    steps.push(Step::Start {
        station: first.clone(),
        line: network.common_line(&path[0], &path[1]),
    });

    // Index of the station where the current ride began.
    let mut ride_start = 0;

    for i in 1..path.len() - 1 {
        let line_in = network.common_line(&path[i - 1], &path[i]);
        let line_out = network.common_line(&path[i], &path[i + 1]);

        if line_in != line_out {
            steps.push(Step::Ride {
                to: path[i].clone(),
                stops: i - ride_start,
            });
            steps.push(Step::Interchange {
                station: path[i].clone(),
                from_line: line_in,
                to_line: line_out,
            });
            ride_start = i;
        }
    }

    let last = path.len() - 1;
    steps.push(Step::Ride {
        to: path[last].clone(),
        stops: last - ride_start,
    });
    steps.push(Step::End {
        station: path[last].clone(),
        line: network.common_line(&path[last - 1], &path[last]),
    });

    Itinerary::new(steps, path.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineId;

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

    #[test]
    fn empty_path() {
        let net = two_line_network();
        let itinerary = segment(&net, &[]);
        assert!(itinerary.is_empty());
    }

    #[test]
    fn single_station_path() {
        let net = two_line_network();
        let itinerary = segment(&net, &names(&["A"]));

        assert_eq!(itinerary.origin(), Some(&station("A")));
        assert_eq!(itinerary.destination(), Some(&station("A")));
        assert_eq!(itinerary.interchange_count(), 0);
        assert_eq!(itinerary.station_count(), 1);
    }

    #[test]
    fn single_line_path_has_no_interchange() {
        let net = two_line_network();
        let itinerary = segment(&net, &names(&["A", "B", "C", "D"]));

        assert_eq!(itinerary.interchange_count(), 0);
        assert_eq!(
            itinerary.steps(),
            &[
                Step::Start {
                    station: station("A"),
                    line: line("Yellow"),
                },
                Step::Ride {
                    to: station("D"),
                    stops: 3,
                },
                Step::End {
                    station: station("D"),
                    line: line("Yellow"),
                },
            ]
        );
    }

    #[test]
    fn detects_the_interchange_at_the_shared_station() {
        let net = two_line_network();
        let itinerary = segment(&net, &names(&["A", "B", "C", "E", "F"]));

        assert_eq!(itinerary.interchange_count(), 1);
        assert_eq!(
            itinerary.steps(),
            &[
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
            ]
        );
    }

    #[test]
    fn endpoints_match_the_path() {
        let net = two_line_network();
        let path = names(&["B", "C", "E"]);
        let itinerary = segment(&net, &path);

        assert_eq!(itinerary.origin(), Some(path.first().unwrap()));
        assert_eq!(itinerary.destination(), Some(path.last().unwrap()));
        assert_eq!(itinerary.station_count(), path.len());
    }

    #[test]
    fn interchange_count_matches_line_discontinuities() {
        let net = two_line_network();
        let path = names(&["A", "B", "C", "E", "F"]);
        let itinerary = segment(&net, &path);

        let mut discontinuities = 0;
        for i in 1..path.len() - 1 {
            let line_in = net.common_line(&path[i - 1], &path[i]);
            let line_out = net.common_line(&path[i], &path[i + 1]);
            if line_in != line_out {
                discontinuities += 1;
            }
        }

        assert_eq!(itinerary.interchange_count(), discontinuities);
    }

    #[test]
    fn missing_metadata_degrades_to_unknown() {
        // B has no line entry of its own.
        let net = Network::builder()
            .add_station(station("A"), [line("Yellow")])
            .add_station(station("C"), [line("Blue")])
            .add_edge(station("A"), station("B"))
            .add_edge(station("B"), station("C"))
            .build();

        let itinerary = segment(&net, &names(&["A", "B", "C"]));
        match &itinerary.steps()[0] {
            Step::Start { line, .. } => assert!(line.is_unknown()),
            other => panic!("expected start step, got {other:?}"),
        }
    }
}
