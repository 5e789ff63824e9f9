//! Listener lifecycle: `MediaServer` (unstarted) -> `ListeningServer` -> stopped.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::{self, state::AppState};

#[derive(Debug, thiserror::Error)]
#[error("failed to bind {addr}: {source}")]
pub struct BindError {
    pub addr: SocketAddr,
    #[source]
    pub source: std::io::Error,
}

/// A configured server that has not claimed its port yet.
#[derive(Debug)]
pub struct MediaServer {
    state: AppState,
}

impl MediaServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Claim the configured port. Failure is final: no other port is tried.
    pub async fn bind(self) -> Result<ListeningServer, BindError> {
        let addr = self.state.config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| BindError { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| BindError { addr, source })?;

        tracing::info!(
            "Serving videos from {} on {}/api (listening on {})",
            self.state.config.watched_dir.display(),
            self.state.config.base_url(),
            local_addr
        );

        Ok(ListeningServer {
            state: self.state,
            listener,
            local_addr,
        })
    }
}

/// A server holding its listener, ready to accept connections.
#[derive(Debug)]
pub struct ListeningServer {
    state: AppState,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl ListeningServer {
    /// The address actually bound (differs from the configured one for port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until `shutdown` resolves. In-flight requests are
    /// drained before this returns.
    pub async fn serve<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = http::build_router(self.state);
        let result = axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await;
        tracing::info!("Server on {} stopped", self.local_addr);
        result
    }
}
