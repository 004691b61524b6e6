//! The immutable transit network model.
//!
//! A [`Network`] is an explicitly constructed value, loaded once at startup
//! and shared read-only across requests (behind an `Arc` in the web layer).
//! It is never a process-wide global: tests build small fixture networks
//! alongside the production one.

mod lines;
mod loader;
mod sample;

pub use lines::LineOrderings;
pub use loader::{NetworkDocument, NetworkError, StationEntry, load_network};
pub use sample::{sample_network, sample_orderings};

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, StationName};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Error returned for out-of-range coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("coordinates out of range: lat {lat}, lon {lon}")]
pub struct InvalidCoordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Construct coordinates, rejecting values outside degree range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinates { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

/// The static transit network: stations, their lines, adjacency, coordinates.
///
/// # Invariants
///
/// - Adjacency is symmetric: if A neighbours B then B neighbours A.
/// - Every station referenced by an edge has a line-set entry (the builder
///   inserts an `Unknown` placeholder when a feed omits line metadata), so
///   lookups during search never need a missing-key branch.
#[derive(Debug, Clone)]
pub struct Network {
    stations: HashMap<StationName, BTreeSet<LineId>>,
    adjacency: HashMap<StationName, BTreeSet<StationName>>,
    coordinates: HashMap<StationName, Coordinates>,
}

impl Network {
    /// Start building a network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::default()
    }

    /// Returns true if the station is part of the network.
    pub fn contains(&self, station: &StationName) -> bool {
        self.stations.contains_key(station)
    }

    /// The set of lines serving a station.
    pub fn lines(&self, station: &StationName) -> Option<&BTreeSet<LineId>> {
        self.stations.get(station)
    }

    /// Stations directly connected to `station`.
    pub fn neighbours(&self, station: &StationName) -> impl Iterator<Item = &StationName> {
        self.adjacency.get(station).into_iter().flatten()
    }

    /// The lexicographically smallest line serving both stations.
    ///
    /// Falls back to [`LineId::unknown`] when the two line sets do not
    /// intersect: adjacency means travel is possible even when line
    /// metadata is incomplete. The smallest-member rule keeps the pick
    /// deterministic when several lines share a track segment.
    pub fn common_line(&self, a: &StationName, b: &StationName) -> LineId {
        match (self.stations.get(a), self.stations.get(b)) {
            (Some(lines_a), Some(lines_b)) => lines_a
                .intersection(lines_b)
                .next()
                .cloned()
                .unwrap_or_else(LineId::unknown),
            _ => LineId::unknown(),
        }
    }

    /// The set of lines serving both stations.
    pub fn common_lines(&self, a: &StationName, b: &StationName) -> BTreeSet<LineId> {
        match (self.stations.get(a), self.stations.get(b)) {
            (Some(lines_a), Some(lines_b)) => lines_a.intersection(lines_b).cloned().collect(),
            _ => BTreeSet::new(),
        }
    }

    /// The lexicographically smallest line serving a station, or `Unknown`.
    pub fn primary_line(&self, station: &StationName) -> LineId {
        self.stations
            .get(station)
            .and_then(|lines| lines.iter().next().cloned())
            .unwrap_or_else(LineId::unknown)
    }

    /// The coordinates of a station, if known.
    pub fn coordinates(&self, station: &StationName) -> Option<Coordinates> {
        self.coordinates.get(station).copied()
    }

    /// All stations in the network.
    pub fn stations(&self) -> impl Iterator<Item = &StationName> {
        self.stations.keys()
    }

    /// All stations with known coordinates.
    pub fn located_stations(&self) -> impl Iterator<Item = (&StationName, Coordinates)> {
        self.coordinates.iter().map(|(s, c)| (s, *c))
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

/// Builder for [`Network`].
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: HashMap<StationName, BTreeSet<LineId>>,
    adjacency: HashMap<StationName, BTreeSet<StationName>>,
    coordinates: HashMap<StationName, Coordinates>,
}

impl NetworkBuilder {
    /// Add a station, merging lines with any existing entry.
    pub fn add_station(
        mut self,
        station: StationName,
        lines: impl IntoIterator<Item = LineId>,
    ) -> Self {
        self.stations.entry(station).or_default().extend(lines);
        self
    }

    /// Add a symmetric edge between two stations.
    pub fn add_edge(mut self, a: StationName, b: StationName) -> Self {
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        self
    }

    /// Add a whole line segment: each station gains the line, consecutive
    /// stations are connected.
    pub fn add_line_segment(mut self, line: LineId, stations: &[StationName]) -> Self {
        for station in stations {
            self = self.add_station(station.clone(), [line.clone()]);
        }
        for pair in stations.windows(2) {
            self = self.add_edge(pair[0].clone(), pair[1].clone());
        }
        self
    }

    /// Record the coordinates of a station.
    pub fn set_coordinates(mut self, station: StationName, coords: Coordinates) -> Self {
        self.coordinates.insert(station, coords);
        self
    }

    /// Finalize the network, backfilling `Unknown` line entries for
    /// stations that only appear in edges.
    pub fn build(mut self) -> Network {
        for station in self.adjacency.keys() {
            self.stations
                .entry(station.clone())
                .or_insert_with(|| BTreeSet::from([LineId::unknown()]));
        }

        Network {
            stations: self.stations,
            adjacency: self.adjacency,
            coordinates: self.coordinates,
        }
    }
}
