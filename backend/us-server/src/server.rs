//! HTTP server lifecycle: bind, serve, drain on shutdown.

use crate::{AppState, ServerError, ServerResult, ShutdownCoordinator, build_router};

use us_config::ServerConfig;

use axum::Router;
use log::info;
use tokio::net::TcpListener;

pub struct Server {
    bind_addr: String,
    router: Router,
}

impl Server {
    /// Build the router for `state`; nothing is bound yet
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        Self {
            bind_addr: config.bind_addr(),
            router: build_router(state),
        }
    }

    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Open the TCP listener on the configured host and port.
    /// Port 0 binds an OS-assigned port.
    pub async fn bind(&self) -> ServerResult<TcpListener> {
        let listener = TcpListener::bind(&self.bind_addr)
            .await
            .map_err(|e| ServerError::bind(&self.bind_addr, e))?;

        // Get actual bound address (important when port is 0 / auto-assigned)
        let actual_addr = listener.local_addr()?;
        info!("Server listening on {}", actual_addr);

        Ok(listener)
    }

    /// Serve requests until `shutdown` fires, then drain in-flight requests.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: ShutdownCoordinator,
    ) -> ServerResult<()> {
        info!("Server ready to accept connections");

        let mut guard = shutdown.subscribe_guard();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                guard.wait().await;
                info!("Draining in-flight requests");
            })
            .await?;

        info!("Graceful shutdown complete");

        Ok(())
    }

    /// Bind then serve
    pub async fn start(self, shutdown: ShutdownCoordinator) -> ServerResult<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }
}
