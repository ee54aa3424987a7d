//! Time-tracking services: clock-in submission and location retrieval.
//!
//! The two services are independent; the only relationship between them is
//! that a caller may feed [`location::LocationFetcher`]'s result into
//! [`clock_in::ClockInSender::send`].

pub mod clock_in;
pub mod location;

/// Endpoint receiving clock-in submissions. Fixed, not configurable.
pub const CLOCK_IN_ENDPOINT: &str = "https://code-dojo/v1/clock-ins";

/// Endpoint serving current GPS coordinates. Fixed, not configurable.
pub const GPS_ENDPOINT: &str = "https://code-dojo/v1/gps";
