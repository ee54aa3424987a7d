//! # timeclock
//!
//! A small time-tracking "clock-in" client library.
//!
//! This crate provides two application services built on injectable ports:
//! - `ClockInSender`: submits a timestamped clock-in (optionally geotagged)
//!   to the remote clock-ins endpoint (`tracking::clock_in`)
//! - `LocationFetcher`: retrieves the device's coordinates from the gps
//!   endpoint (`tracking::location`)
//!
//! The HTTP transport, the clock, and the warning sink are all trait ports
//! so that tests can substitute deterministic doubles.
//!
//! ## Example usage (in another crate)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use timeclock::http::reqwest_transport::ReqwestTransport;
//! use timeclock::notification::tracing_warning_sink::TracingWarningSink;
//! use timeclock::time::system_clock::SystemClock;
//! use timeclock::tracking::clock_in::ClockInSender;
//!
//! let sender = ClockInSender::new(
//!     Arc::new(ReqwestTransport::new()),
//!     Arc::new(SystemClock),
//!     Arc::new(TracingWarningSink),
//! );
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use reqwest;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;

// ===============================
// Public modules
// ===============================
pub mod http;
pub mod notification;
pub mod time;
pub mod tracking;
