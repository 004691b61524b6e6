//! Network JSON loading.
//!
//! The on-disk format is the offline ingestion's output: a list of stations
//! with their lines and optional coordinates, plus a list of undirected
//! edges. Line sets are serialized as sorted lists (JSON has no set type)
//! and restored to `BTreeSet` on load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, StationName};

use super::{Coordinates, Network};

/// Errors that can occur when loading a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Failed to read the network file
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the network JSON
    #[error("failed to parse network JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is structurally valid JSON but violates an invariant
    #[error("invalid network: {message}")]
    Invalid { message: String },
}

/// A station entry in the network document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationEntry {
    pub name: StationName,

    /// Lines serving this station, as a sorted list at the JSON boundary.
    #[serde(default)]
    pub lines: Vec<LineId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// The serialized form of a network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub stations: Vec<StationEntry>,

    #[serde(default)]
    pub edges: Vec<(StationName, StationName)>,
}

impl NetworkDocument {
    /// Build the immutable [`Network`] from this document.
    ///
    /// Duplicate station entries merge their line sets. Edges may reference
    /// stations without an entry; the builder backfills `Unknown` lines for
    /// them. A station with only one of `lat`/`lon` is rejected.
    pub fn into_network(self) -> Result<Network, NetworkError> {
        let mut builder = Network::builder();

        for entry in self.stations {
            builder = builder.add_station(entry.name.clone(), entry.lines);

            match (entry.lat, entry.lon) {
                (Some(lat), Some(lon)) => {
                    let coords =
                        Coordinates::new(lat, lon).map_err(|e| NetworkError::Invalid {
                            message: format!("station {}: {}", entry.name, e),
                        })?;
                    builder = builder.set_coordinates(entry.name, coords);
                }
                (None, None) => {}
                _ => {
                    return Err(NetworkError::Invalid {
                        message: format!(
                            "station {}: latitude and longitude must both be present",
                            entry.name
                        ),
                    });
                }
            }
        }

        for (a, b) in self.edges {
            if a == b {
                return Err(NetworkError::Invalid {
                    message: format!("self-edge at {}", a),
                });
            }
            builder = builder.add_edge(a, b);
        }

        Ok(builder.build())
    }

    /// Serialize a network back to document form.
    ///
    /// Stations and edges come out sorted, so the output is stable across
    /// runs. Each undirected edge appears once, smaller endpoint first.
    pub fn from_network(network: &Network) -> Self {
        let mut stations: Vec<StationEntry> = network
            .stations()
            .map(|name| {
                let coords = network.coordinates(name);
                StationEntry {
                    name: name.clone(),
                    lines: network
                        .lines(name)
                        .map(|set| set.iter().cloned().collect())
                        .unwrap_or_default(),
                    lat: coords.map(|c| c.lat),
                    lon: coords.map(|c| c.lon),
                }
            })
            .collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));

        let mut edges = Vec::new();
        for station in network.stations() {
            for neighbour in network.neighbours(station) {
                if station < neighbour {
                    edges.push((station.clone(), neighbour.clone()));
                }
            }
        }
        edges.sort();

        Self { stations, edges }
    }
}

/// Load a network from a JSON file.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, NetworkError> {
    let contents = std::fs::read_to_string(path)?;
    let document: NetworkDocument = serde_json::from_str(&contents)?;
    document.into_network()
}
