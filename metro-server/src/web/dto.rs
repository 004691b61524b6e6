//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Step;

/// Request to plan a route between two named stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// "fastest" (default) or "comfort"
    pub criteria: Option<String>,
}

/// Request to plan a route from a free-text message.
#[derive(Debug, Deserialize)]
pub struct TextRouteRequest {
    /// The rider's message
    pub text: String,

    /// Origin of the previous route, for context reuse
    pub previous_from: Option<String>,

    /// Destination of the previous route, for context reuse
    pub previous_to: Option<String>,
}

/// One step of the planned itinerary.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepDto {
    Start {
        station: String,
        line: String,
    },
    Ride {
        to: String,
        stops: usize,
    },
    Interchange {
        station: String,
        from_line: String,
        to_line: String,
    },
    End {
        station: String,
        line: String,
    },
}

impl StepDto {
    /// Convert a domain step.
    pub fn from_step(step: &Step) -> Self {
        match step {
            Step::Start { station, line } => StepDto::Start {
                station: station.to_string(),
                line: line.to_string(),
            },
            Step::Ride { to, stops } => StepDto::Ride {
                to: to.to_string(),
                stops: *stops,
            },
            Step::Interchange {
                station,
                from_line,
                to_line,
            } => StepDto::Interchange {
                station: station.to_string(),
                from_line: from_line.to_string(),
                to_line: to_line.to_string(),
            },
            Step::End { station, line } => StepDto::End {
                station: station.to_string(),
                line: line.to_string(),
            },
        }
    }
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Origin station
    pub from: String,

    /// Destination station
    pub to: String,

    /// Criteria the route was planned under
    pub criteria: String,

    /// Interchange penalty applied, in minutes
    pub penalty_mins: i64,

    /// The full station sequence
    pub stations: Vec<String>,

    /// Structured steps
    pub steps: Vec<StepDto>,

    /// Number of line changes
    pub interchanges: usize,

    /// Estimated journey time in minutes
    pub est_mins: i64,

    /// The rendered chat message
    pub message: String,
}

/// Request for the nearest station, by coordinates or by landmark text.
#[derive(Debug, Deserialize)]
pub struct NearestRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,

    /// Landmark text to geocode instead of coordinates
    pub q: Option<String>,
}

/// Response for the nearest station.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub station: String,
    pub distance_km: f64,
    pub line: String,

    /// The geocoded address, when the query was a landmark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_address: Option<String>,
}

/// Request to search station names.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    pub q: String,
    pub limit: Option<usize>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<String>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
