use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use metro_server::geocode::{CachedGeocoder, GeocodeCacheConfig, GeocodeClient, GeocodeConfig};
use metro_server::network::{load_network, sample_network, sample_orderings};
use metro_server::routing::RoutingConfig;
use metro_server::web::{AppState, create_router};

/// User agent sent to the geocoder, per Nominatim usage policy.
const GEOCODER_USER_AGENT: &str = "metro-server/0.1 (route planner)";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load the network from a feed file if configured, else the built-in
    // sample. Orderings (for direction hints) currently only exist for the
    // sample; a configured network serves routes without them.
    let (network, orderings) = match std::env::var("METRO_NETWORK_PATH") {
        Ok(path) => {
            let network = load_network(&path).expect("failed to load network file");
            tracing::info!(path = %path, stations = network.station_count(), "loaded network");
            (network, metro_server::network::LineOrderings::new())
        }
        Err(_) => {
            let network = sample_network();
            tracing::info!(
                stations = network.station_count(),
                "METRO_NETWORK_PATH not set, using built-in sample network"
            );
            (network, sample_orderings())
        }
    };

    let geocode_client =
        GeocodeClient::new(GeocodeConfig::new(GEOCODER_USER_AGENT))
            .expect("failed to create geocoding client");
    let geocoder = CachedGeocoder::new(geocode_client, &GeocodeCacheConfig::default());

    let state = AppState::new(network, orderings, RoutingConfig::default(), geocoder);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!(%addr, "metro route planner listening");
    println!("Metro Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health           - Health check");
    println!("  GET  /route            - Plan between stations (?from=&to=&criteria=)");
    println!("  POST /route/text       - Plan from a free-text message");
    println!("  GET  /stations/nearest - Nearest station (?lat=&lon= or ?q=landmark)");
    println!("  GET  /stations/search  - Search station names (?q=)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
