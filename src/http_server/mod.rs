//! HTTP Server Module
//!
//! Exposes the release validators over HTTP:
//! - POST /releases/validate
//! - POST /organizations/:organization_slug/releases/validate
//! - GET /health

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, RestError, RestResult};
pub use routes::{health_routes, release_routes, ReleaseState};
pub use server::HttpServer;
