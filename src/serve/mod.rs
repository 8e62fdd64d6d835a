//! HTTP boundary for the stamp-card service.
//!
//! A thin adapter over the pipeline: the handler maps query parameters in
//! and PNG bytes out. Every internal failure kind collapses to the same
//! generic client-error response; the kind is logged before it disappears
//! from the external contract.

mod handler;
mod router;

pub use handler::AppState;
pub use router::build_router;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::assets::{AssetStore, PositionDirectory};
use crate::error::{Result, StampError};

/// Stamp-card HTTP server.
pub struct StampServer {
    bind: SocketAddr,
    state: AppState,
}

impl StampServer {
    /// Create a server over an asset directory.
    ///
    /// The store lives for the process lifetime, so the sprite is loaded
    /// once and shared read-only across all requests.
    pub fn new(bind: SocketAddr, assets_root: impl Into<PathBuf>) -> Self {
        let root = assets_root.into();
        Self {
            bind,
            state: AppState {
                assets: Arc::new(AssetStore::new(&root)),
                positions: Arc::new(PositionDirectory::new(&root)),
            },
        }
    }

    /// The address this server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> Result<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.bind)
            .await
            .map_err(|e| StampError::Config {
                message: format!("failed to bind {}: {e}", self.bind),
                help: Some("is the port already in use?".to_string()),
            })?;

        tracing::info!("stampcard listening on {}", self.bind);
        axum::serve(listener, app)
            .await
            .map_err(|e| StampError::Internal(e.to_string()))
    }
}
