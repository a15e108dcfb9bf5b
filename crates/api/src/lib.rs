//! Character catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! templates, report rendering) so integration tests and the binary
//! entrypoints can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod report;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod templates;
pub mod upload;
