//! Metro route planner server.
//!
//! Plans routes over a metro network with a tunable interchange penalty:
//! "fastest" barely minds a line change, "comfort" trades several extra
//! stations to avoid one. Also answers nearest-station queries from
//! coordinates or geocoded landmarks.

pub mod domain;
pub mod geo;
pub mod geocode;
pub mod network;
pub mod render;
pub mod resolve;
pub mod routing;
pub mod web;
