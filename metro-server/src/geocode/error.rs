//! Geocoder error types.

/// Errors that can occur when talking to the geocoding service.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoder returned an error status
    #[error("geocoder error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be interpreted
    #[error("geocoder response parse error: {message}")]
    Parse { message: String },
}
