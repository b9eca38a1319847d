//! HTTP server startup logic.
//!
//! Startup has two phases. `bind` is the Starting phase: it resolves the
//! address and claims the port. `serve` is the Serving phase and runs until
//! shutdown. Splitting them lets the caller surface a bind failure before any
//! request can be accepted.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use super::shutdown::shutdown_signal;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{addr}': {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Parse `addr` and bind a listener to it.
///
/// A port that is already in use yields `ServerError::Bind`; the socket is
/// never shared with another process.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    let addr: SocketAddr = addr.parse().map_err(|source| ServerError::Address {
        addr: addr.to_string(),
        source,
    })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::debug!(%addr, "Listener bound");
    Ok(listener)
}

/// Serve `app` until SIGTERM or SIGINT.
///
/// This function blocks until the server shuts down.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    serve_with_shutdown(listener, app, shutdown_signal()).await
}

/// Serve `app` until `signal` resolves, then drain in-flight connections.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Serving HTTP");

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
