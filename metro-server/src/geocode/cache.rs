//! Caching layer for geocoding responses.
//!
//! Landmark queries repeat heavily ("india gate", "airport") and Nominatim
//! asks clients to avoid hammering it, so successful lookups are cached by
//! normalized query text. Failed lookups (`None`) are cached too: a query
//! the geocoder cannot place now will not place in a minute either.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use super::client::{GeocodeClient, ResolvedPlace};
use super::error::GeocodeError;

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Geocoding client with a TTL cache in front.
pub struct CachedGeocoder {
    client: GeocodeClient,
    cache: MokaCache<String, Option<Arc<ResolvedPlace>>>,
}

impl CachedGeocoder {
    /// Create a new cached geocoder.
    pub fn new(client: GeocodeClient, config: &GeocodeCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Resolve free text to a place, using the cache if possible.
    ///
    /// Errors are not cached; a transient failure does not poison the key.
    pub async fn resolve_address(
        &self,
        query: &str,
    ) -> Result<Option<Arc<ResolvedPlace>>, GeocodeError> {
        let key = query.trim().to_lowercase();

        if let Some(hit) = self.cache.get(&key).await {
            return Ok(hit);
        }

        let place = self.client.resolve_address(query).await?.map(Arc::new);
        self.cache.insert(key, place.clone()).await;
        Ok(place)
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}
