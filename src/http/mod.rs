//! # HTTP Server
//!
//! Thin axum front for [`RecordStore`](crate::RecordStore): decodes requests,
//! calls the store, encodes results and errors.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse};

use crate::store::RecordStore;

/// HTTP server over one record store.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Open the store named by `config` and build the server around it.
    pub fn with_config(config: ServerConfig) -> crate::Result<Self> {
        let store = RecordStore::builder(&config.data_file)
            .pretty(config.pretty)
            .build()?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Build the server around an already-open store.
    pub fn with_store(config: ServerConfig, store: Arc<RecordStore>) -> Self {
        let router = routes::user_routes(store).layer(TraceLayer::new_for_http());
        Self { config, router }
    }

    /// Address the server will bind.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C.
    pub async fn start(self) -> std::io::Result<()> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;
        info!(%addr, data_file = %self.config.data_file.display(), "serving user API");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
