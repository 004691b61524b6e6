//! Geographic queries over the network.
//!
//! Great-circle distance and nearest-station lookup. A linear scan is
//! plenty at metro scale (tens to low hundreds of stations); no spatial
//! index.

use crate::domain::{LineId, StationName};
use crate::network::{Coordinates, Network};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle (haversine) distance between two points, in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// The result of a nearest-station lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStation {
    pub station: StationName,
    pub distance_km: f64,
    /// The station's primary line (lexicographically smallest).
    pub line: LineId,
}

/// Find the station nearest to a query point.
///
/// Only stations with known coordinates participate; returns `None` when
/// the network has none. Distance ties break towards the lexicographically
/// smaller station name so results are reproducible.
pub fn nearest_station(network: &Network, point: Coordinates) -> Option<NearestStation> {
    let mut best: Option<(f64, &StationName)> = None;

    for (station, coords) in network.located_stations() {
        let distance = haversine_km(point, coords);
        let closer = match best {
            None => true,
            Some((best_distance, best_station)) => {
                distance < best_distance
                    || (distance == best_distance && station < best_station)
            }
        };
        if closer {
            best = Some((distance, station));
        }
    }

    best.map(|(distance_km, station)| NearestStation {
        station: station.clone(),
        distance_km,
        line: network.primary_line(station),
    })
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

    fn coords(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let p = coords(28.6327, 77.2195);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn known_distance_delhi_to_mumbai() {
        // Connaught Place to Chhatrapati Shivaji Terminus, roughly 1150 km.
        let delhi = coords(28.6327, 77.2195);
        let mumbai = coords(18.9398, 72.8355);
        let d = haversine_km(delhi, mumbai);
        assert!((1100.0..1200.0).contains(&d), "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = coords(28.6, 77.2);
        let b = coords(28.5, 77.3);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    fn located_network() -> Network {
        Network::builder()
            .add_station(station("Rajiv Chowk"), [line("Yellow"), line("Blue")])
            .add_station(station("Hauz Khas"), [line("Yellow"), line("Magenta")])
            .add_station(station("Unlocated"), [line("Red")])
            .set_coordinates(station("Rajiv Chowk"), coords(28.6327, 77.2195))
            .set_coordinates(station("Hauz Khas"), coords(28.5433, 77.2066))
            .build()
    }

    #[test]
    fn exact_station_position_returns_it_at_zero_distance() {
        let net = located_network();
        let found = nearest_station(&net, coords(28.6327, 77.2195)).unwrap();

        assert_eq!(found.station, station("Rajiv Chowk"));
        assert!(found.distance_km < 0.001);
        // Lexicographically smallest of {Blue, Yellow}
        assert_eq!(found.line, line("Blue"));
    }

    #[test]
    fn picks_the_closer_station() {
        let net = located_network();
        let found = nearest_station(&net, coords(28.55, 77.21)).unwrap();
        assert_eq!(found.station, station("Hauz Khas"));
    }

    #[test]
    fn no_coordinates_gives_none() {
        let net = Network::builder()
            .add_station(station("A"), [line("Yellow")])
            .build();

        assert!(nearest_station(&net, coords(28.6, 77.2)).is_none());
    }
}
