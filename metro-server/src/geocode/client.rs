//! Nominatim geocoding client.
//!
//! Turns landmark-style text ("iit gate") into coordinates, which the
//! nearest-station locator then maps onto the network. Nominatim requires
//! an identifying User-Agent and returns latitude/longitude as strings.

use serde::Deserialize;

use super::error::GeocodeError;

/// Default base URL for the Nominatim search endpoint.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// How many comma-separated parts of the display name to keep. OSM
/// display names are very long; the first few parts are enough.
const SHORT_NAME_PARTS: usize = 3;

/// Raw Nominatim search result.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    /// Shortened display name.
    pub address: String,
    /// Full OSM display name.
    pub full_address: String,
    pub lat: f64,
    pub lon: f64,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL of the search endpoint
    pub base_url: String,
    /// User-Agent header value (Nominatim policy requires one)
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// ISO country code to restrict results to
    pub country_code: String,
}

impl GeocodeConfig {
    /// Create a config with the given user agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: user_agent.into(),
            timeout_secs: 5,
            country_code: "in".to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for the Nominatim search API.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    country_code: String,
}

impl GeocodeClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            country_code: config.country_code,
        })
    }

    /// Resolve free-text into a place.
    ///
    /// Returns `Ok(None)` for queries the geocoder cannot place, and for
    /// queries too short to mean anything.
    pub async fn resolve_address(
        &self,
        query: &str,
    ) -> Result<Option<ResolvedPlace>, GeocodeError> {
        let query = query.trim();
        if query.len() < 3 {
            return Ok(None);
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", "1"),
                ("addressdetails", "1"),
                ("countrycodes", self.country_code.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let places: Vec<PlaceDto> = response.json().await?;
        match places.into_iter().next() {
            Some(dto) => Ok(Some(convert(dto)?)),
            None => Ok(None),
        }
    }
}

/// Convert the raw DTO, parsing the stringly-typed coordinates.
fn convert(dto: PlaceDto) -> Result<ResolvedPlace, GeocodeError> {
    let lat: f64 = dto.lat.parse().map_err(|_| GeocodeError::Parse {
        message: format!("bad latitude: {}", dto.lat),
    })?;
    let lon: f64 = dto.lon.parse().map_err(|_| GeocodeError::Parse {
        message: format!("bad longitude: {}", dto.lon),
    })?;

    Ok(ResolvedPlace {
        address: shorten(&dto.display_name),
        full_address: dto.display_name,
        lat,
        lon,
    })
}

/// Keep the first few comma-separated parts of an OSM display name.
fn shorten(display_name: &str) -> String {
    display_name
        .split(',')
        .take(SHORT_NAME_PARTS)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_keeps_first_three_parts() {
        let long = "IIT Delhi Main Gate, Hauz Khas, South Delhi, Delhi, 110016, India";
        assert_eq!(shorten(long), "IIT Delhi Main Gate, Hauz Khas, South Delhi");
    }

    #[test]
    fn shorten_handles_short_names() {
        assert_eq!(shorten("India Gate"), "India Gate");
    }

    #[test]
    fn convert_parses_canned_response() {
        let json = r#"[
            {
                "display_name": "India Gate, Kartavya Path, New Delhi, Delhi, India",
                "lat": "28.612894",
                "lon": "77.229446"
            }
        ]"#;

        let places: Vec<PlaceDto> = serde_json::from_str(json).unwrap();
        let place = convert(places.into_iter().next().unwrap()).unwrap();

        assert_eq!(place.address, "India Gate, Kartavya Path, New Delhi");
        assert!((place.lat - 28.612894).abs() < 1e-9);
        assert!((place.lon - 77.229446).abs() < 1e-9);
    }

    #[test]
    fn convert_rejects_bad_coordinates() {
        let dto = PlaceDto {
            display_name: "Somewhere".to_string(),
            lat: "not-a-number".to_string(),
            lon: "77.2".to_string(),
        };
        assert!(matches!(convert(dto), Err(GeocodeError::Parse { .. })));
    }
}
