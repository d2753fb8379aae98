//! HTTP server for the tournament rooms API.
//!
//! Exposes the [`tourney`] store over a JSON REST interface built with axum.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
