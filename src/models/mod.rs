//! Domain models for the Tech Dev Club backend.
//!
//! # Core Concepts
//!
//! ## Permanent Data
//!
//! - [`Resource`]: One entry in the curated learning catalog. The catalog is
//!   loaded once from a bundled JSON document and immutable afterwards.
//!
//! ## Ephemeral Data
//!
//! These exist only for the duration of a single request or session:
//!
//! - [`WeatherSnapshot`] / [`DailyForecast`]: conditions fetched per render,
//!   discarded immediately.
//! - [`SignupForm`] / [`AuthSession`]: the signup round-trip; only the
//!   resulting session token outlives the request, in the local session file.

mod resource;
mod signup;
mod weather;

pub use resource::*;
pub use signup::*;
pub use weather::*;
