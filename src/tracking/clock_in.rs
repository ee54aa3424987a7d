use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::http::transport::{HttpRequest, HttpTransport};
use crate::notification::warning_sink::WarningSink;
use crate::time::clock::Clock;
use crate::tracking::CLOCK_IN_ENDPOINT;

/// Warning emitted when GPS data is mandatory but absent.
pub const GPS_MISSING_WARNING: &str = "GPS is not available, unable to clock in";

/// Why a clock-in attempt failed.
///
/// The `Display` text of each variant is the user-visible failure reason;
/// callers assert on it directly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockInError {
    /// The transport failed to deliver the submission.
    #[error("Failed to clock in")]
    Submission,

    /// GPS data was mandatory but no coordinates were supplied.
    /// No request was attempted.
    #[error("GPS is not available")]
    GpsUnavailable,
}

/// Wire body of a clock-in submission.
///
/// The `gpsCoordinates` key is omitted entirely when no coordinates are
/// supplied, rather than serialized as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClockInBody {
    clock_in_date_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    gps_coordinates: Option<String>,
}

/// Submits clock-ins to the remote clock-ins endpoint.
///
/// ## Responsibilities
///
/// - Guards the GPS-required precondition (warn + reject, no request)
/// - Builds the JSON submission from the current timestamp and the
///   optionally supplied coordinates
/// - Dispatches it exactly once through the transport port
///
/// ## What this type does *not* do
///
/// - Retry failed submissions or queue them for later
/// - Obtain coordinates itself (that is `LocationFetcher`'s job; the
///   caller passes the result in)
pub struct ClockInSender {
    transport: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
    warnings: Arc<dyn WarningSink>,
}

impl ClockInSender {
    /// Constructs a new `ClockInSender` from its three capabilities.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        clock: Arc<dyn Clock>,
        warnings: Arc<dyn WarningSink>,
    ) -> Self {
        Self {
            transport,
            clock,
            warnings,
        }
    }

    /// Submits one clock-in, resolving or failing exactly once.
    ///
    /// ## Arguments
    ///
    /// - `coordinates`: latitude/longitude encoded as a string, e.g.
    ///   `"47.4978789,19.0402383"`; opaque to this service
    /// - `gps_required`: when `true` and `coordinates` is `None`, the
    ///   call warns, fails with [`ClockInError::GpsUnavailable`], and
    ///   performs no network request
    ///
    /// ## Returns
    ///
    /// - `Ok("Clocked in")` when any response was delivered
    /// - `Err(ClockInError::Submission)` on transport failure
    pub async fn send(
        &self,
        coordinates: Option<&str>,
        gps_required: bool,
    ) -> Result<&'static str, ClockInError> {
        if gps_required && coordinates.is_none() {
            self.warnings.warn(GPS_MISSING_WARNING);
            return Err(ClockInError::GpsUnavailable);
        }

        let body = ClockInBody {
            clock_in_date_time: self.clock.now().timestamp_millis().to_string(),
            gps_coordinates: coordinates.map(str::to_owned),
        };
        let payload = serde_json::to_string(&body).map_err(|_| ClockInError::Submission)?;

        let request = HttpRequest::post(CLOCK_IN_ENDPOINT)
            .header("Content-Type", "application/json")
            .body(payload);

        match self.transport.request(request).await {
            Ok(_) => Ok("Clocked in"),
            Err(_) => Err(ClockInError::Submission),
        }
    }
}
