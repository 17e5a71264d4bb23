//! Tech Dev Club backend.
//!
//! A single-binary service behind the community site: it serves the curated
//! resource catalog with search and filtering, relays signups to the auth
//! backend, enriches upcoming events with weather, and fronts the email
//! providers so their credentials stay server-side. A small CLI drives the
//! server, the client-side signup flow, and deploy artifact generation.

pub mod analytics;
pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod email;
pub mod hosting;
pub mod models;
pub mod weather;
