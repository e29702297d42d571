use std::sync::Arc;

use tokio::net::TcpListener;

use brl_ledger::RoyaltyLedger;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::SharedLedger;
use crate::router::build_router;

/// Royalty API server over one shared in-memory ledger.
pub struct RoyaltyServer {
    config: ServerConfig,
    ledger: SharedLedger,
}

impl RoyaltyServer {
    /// Server over the production seed fixture.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_ledger(config, Arc::new(RoyaltyLedger::seeded()))
    }

    /// Server over an explicit ledger, for tests and embedding.
    pub fn with_ledger(config: ServerConfig, ledger: SharedLedger) -> Self {
        Self { config, ledger }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.ledger.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.ledger);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("royalty API listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = RoyaltyServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:5000".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = RoyaltyServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
