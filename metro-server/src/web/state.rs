//! Application state for the web layer.

use std::sync::Arc;

use crate::geocode::CachedGeocoder;
use crate::network::{LineOrderings, Network};
use crate::routing::RoutingConfig;

/// Shared application state.
///
/// Everything here is read-only after startup; the network in particular
/// is shared across requests without any locking.
#[derive(Clone)]
pub struct AppState {
    /// The transit network
    pub network: Arc<Network>,

    /// Station order per line, for direction hints
    pub orderings: Arc<LineOrderings>,

    /// Routing cost parameters
    pub config: Arc<RoutingConfig>,

    /// Cached landmark geocoder
    pub geocoder: Arc<CachedGeocoder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: Network,
        orderings: LineOrderings,
        config: RoutingConfig,
        geocoder: CachedGeocoder,
    ) -> Self {
        Self {
            network: Arc::new(network),
            orderings: Arc::new(orderings),
            config: Arc::new(config),
            geocoder: Arc::new(geocoder),
        }
    }
}
