//! HTTP server startup logic.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::utils::error::{KeepAliveError, Result};

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening for HTTP requests");
    Ok(listener)
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain open connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| KeepAliveError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
