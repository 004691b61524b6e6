//! Landmark geocoding.
//!
//! Maps free-text places to coordinates via Nominatim, with a TTL cache.
//! Combined with the nearest-station locator this answers "which station
//! is near India Gate?".

mod cache;
mod client;
mod error;

pub use cache::{CachedGeocoder, GeocodeCacheConfig};
pub use client::{GeocodeClient, GeocodeConfig, ResolvedPlace};
pub use error::GeocodeError;
