//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::StationName;
use crate::geo::nearest_station;
use crate::geocode::GeocodeError;
use crate::network::{Coordinates, Network};
use crate::render::Renderer;
use crate::resolve::KeywordResolver;
use crate::routing::{PathFinder, RoutingCriteria, segment};

use super::dto::*;
use super::state::AppState;

/// Clarification message when a rider's text names no known stations.
const CLARIFY_MESSAGE: &str =
    "🚇 I couldn't identify the Metro Stations. Please try:\n*Route from Rajiv Chowk to Noida*";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/route", get(route_between))
        .route("/route/text", post(route_from_text))
        .route("/stations/nearest", get(nearest))
        .route("/stations/search", get(search_stations))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a route between two named stations.
async fn route_between(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = parse_station(&req.from)?;
    let to = parse_station(&req.to)?;

    let criteria = match &req.criteria {
        Some(raw) => raw.parse::<RoutingCriteria>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => RoutingCriteria::default(),
    };

    plan_route(&state, &from, &to, criteria).map(Json)
}

/// Plan a route from a free-text message, with previous-route context.
async fn route_from_text(
    State(state): State<AppState>,
    Json(req): Json<TextRouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let criteria = RoutingCriteria::from_message(&req.text);

    let previous = previous_route(&req);
    let (from, to) = resolve_endpoints(&state.network, &req.text, previous)?;

    plan_route(&state, &from, &to, criteria).map(Json)
}

/// Find the station nearest to coordinates or a geocoded landmark.
async fn nearest(
    State(state): State<AppState>,
    Query(req): Query<NearestRequest>,
) -> Result<Json<NearestResponse>, AppError> {
    let (point, resolved_address) = match (&req.q, req.lat, req.lon) {
        (Some(query), _, _) => {
            let place = state
                .geocoder
                .resolve_address(query)
                .await?
                .ok_or_else(|| AppError::NotFound {
                    message: format!("could not locate '{}'", query),
                })?;
            let point =
                Coordinates::new(place.lat, place.lon).map_err(|e| AppError::Internal {
                    message: e.to_string(),
                })?;
            (point, Some(place.address.clone()))
        }
        (None, Some(lat), Some(lon)) => {
            let point = Coordinates::new(lat, lon).map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;
            (point, None)
        }
        _ => {
            return Err(AppError::BadRequest {
                message: "provide either q or both lat and lon".to_string(),
            });
        }
    };

    let found = nearest_station(&state.network, point).ok_or_else(|| AppError::NotFound {
        message: "no station coordinates available".to_string(),
    })?;

    Ok(Json(NearestResponse {
        station: found.station.to_string(),
        distance_km: (found.distance_km * 100.0).round() / 100.0,
        line: found.line.to_string(),
        resolved_address,
    }))
}

/// Search stations by name substring.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let needle = req.q.to_lowercase();

    let mut stations: Vec<String> = state
        .network
        .stations()
        .filter(|s| s.as_str().to_lowercase().contains(&needle))
        .map(|s| s.to_string())
        .collect();
    stations.sort();
    stations.truncate(limit);

    Json(StationSearchResponse { stations })
}

/// Shared planning path for both route endpoints.
fn plan_route(
    state: &AppState,
    from: &StationName,
    to: &StationName,
    criteria: RoutingCriteria,
) -> Result<RouteResponse, AppError> {
    for station in [from, to] {
        if !state.network.contains(station) {
            return Err(AppError::BadRequest {
                message: format!("unknown station: {}", station),
            });
        }
    }

    let penalty = criteria
        .penalty(&state.config)
        .map_err(|e| AppError::Internal {
            message: e.to_string(),
        })?;

    let finder = PathFinder::new(&state.network, &state.config);
    let path = finder
        .find_path(from, to, penalty)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no route found between {} and {}", from, to),
        })?;

    let itinerary = segment(&state.network, &path);
    let renderer = Renderer::new(&state.orderings, &state.config);
    let message = renderer.render(&itinerary);

    Ok(RouteResponse {
        from: from.to_string(),
        to: to.to_string(),
        criteria: criteria.to_string(),
        penalty_mins: penalty.mins(),
        stations: path.iter().map(|s| s.to_string()).collect(),
        steps: itinerary.steps().iter().map(StepDto::from_step).collect(),
        interchanges: itinerary.interchange_count(),
        est_mins: itinerary.station_count() as i64 * state.config.hop_cost_mins,
        message,
    })
}

/// The previous route pair, when the request carries both halves.
fn previous_route(req: &TextRouteRequest) -> Option<(StationName, StationName)> {
    match (&req.previous_from, &req.previous_to) {
        (Some(from), Some(to)) => {
            let from = StationName::parse(from).ok()?;
            let to = StationName::parse(to).ok()?;
            Some((from, to))
        }
        _ => None,
    }
}

/// Resolve origin and destination from message text.
///
/// Stations named in the text win; when the text names fewer than two, a
/// previous route is reused ("minimum exchange" refines the last query).
fn resolve_endpoints(
    network: &Network,
    text: &str,
    previous: Option<(StationName, StationName)>,
) -> Result<(StationName, StationName), AppError> {
    let resolver = KeywordResolver::new(network);
    let mut found = resolver.extract_endpoints(text);

    if found.len() >= 2 {
        let to = found.swap_remove(1);
        let from = found.swap_remove(0);
        return Ok((from, to));
    }

    if let Some(previous) = previous {
        tracing::info!(from = %previous.0, to = %previous.1, "reusing previous route context");
        return Ok(previous);
    }

    Err(AppError::BadRequest {
        message: CLARIFY_MESSAGE.to_string(),
    })
}

fn parse_station(raw: &str) -> Result<StationName, AppError> {
    StationName::parse(raw).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
