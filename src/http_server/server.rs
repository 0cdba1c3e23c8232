//! # HTTP Server
//!
//! Combines the health and release validation routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;

use super::routes::{health_routes, release_routes, ReleaseState};
use crate::config::AppConfig;
use crate::observability::{log_event, Event};

pub struct HttpServer {
    config: AppConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    fn build_router(config: &AppConfig) -> Router {
        let release_state = Arc::new(ReleaseState::new(&config.validation));

        Router::new()
            .merge(health_routes())
            .merge(release_routes(release_state))
            .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
    }

    pub fn socket_addr(&self) -> String {
        self.config.server.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the configured address and serves until the process stops
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let addr_text = addr.to_string();
        log_event(Event::ServerStart, &[("addr", addr_text.as_str())]);

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_server::HttpServerConfig;

    #[test]
    fn test_socket_addr_from_config() {
        let config = AppConfig {
            server: HttpServerConfig::with_port(9000),
            ..Default::default()
        };
        assert_eq!(HttpServer::with_config(config).socket_addr(), "0.0.0.0:9000");
    }

    #[tokio::test]
    async fn test_start_rejects_bad_address() {
        let config = AppConfig {
            server: HttpServerConfig {
                host: "not an address".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = HttpServer::with_config(config).start().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
