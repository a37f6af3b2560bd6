use crate::ShutdownCoordinator;

use tokio::sync::watch;

/// Waits for a [`ShutdownCoordinator`] to fire
pub struct ShutdownGuard {
    shutdown_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Wait for shutdown signal
    ///
    /// Never completes if every coordinator is dropped without firing.
    pub async fn wait(&mut self) {
        if self.shutdown_rx.wait_for(|stopped| *stopped).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Poll for shutdown signal (non-blocking)
    pub fn poll_shutdown(&self) -> bool {
        *self.shutdown_rx.borrow()
    }
}
