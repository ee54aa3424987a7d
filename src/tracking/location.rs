use std::sync::Arc;

use thiserror::Error;

use crate::http::transport::{HttpRequest, HttpTransport};
use crate::tracking::GPS_ENDPOINT;

/// The coordinates value resolved on a successful fetch.
///
/// Stands in for a real location read; the endpoint's response body is
/// only checked for having arrived, not parsed.
pub const FIXED_COORDINATES: &str = "47.4978789,19.0402383";

/// Why a location fetch failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// The transport failed to deliver the fetch.
    #[error("Failed to fetch GPS coordinates")]
    Fetch,
}

/// Retrieves the device's current coordinates from the gps endpoint.
///
/// Single attempt per call, no caching. The result is a
/// latitude/longitude string that `ClockInSender` treats as opaque.
pub struct LocationFetcher {
    transport: Arc<dyn HttpTransport>,
}

impl LocationFetcher {
    /// Constructs a new `LocationFetcher` over the given transport.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetches coordinates, resolving or failing exactly once.
    ///
    /// ## Returns
    ///
    /// - `Ok(coordinates)` — a non-empty coordinates string — when any
    ///   response was delivered
    /// - `Err(LocationError::Fetch)` on transport failure
    pub async fn fetch(&self) -> Result<String, LocationError> {
        let request = HttpRequest::get(GPS_ENDPOINT).header("Content-Type", "application/json");

        match self.transport.request(request).await {
            Ok(_) => Ok(FIXED_COORDINATES.to_string()),
            Err(_) => Err(LocationError::Fetch),
        }
    }
}
