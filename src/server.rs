//! HTTP server assembly
//!
//! Combines the movie router with CORS and binds the listener.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::api::MovieApi;
use crate::config::ServerConfig;
use crate::observability::Logger;
use crate::store::DocumentStore;

/// HTTP server for the movie catalog
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Assemble the server around an injected store
    pub fn new<S: DocumentStore + 'static>(config: ServerConfig, store: S) -> Self {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let router = MovieApi::new(store).router().layer(cors);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the process exits
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        Logger::info("server_listening", &[("addr", addr.as_str())]);

        axum::serve(listener, self.router).await
    }
}
