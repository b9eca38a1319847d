//! HTTP server module.
//!
//! Plain HTTP/1.1 only; TLS terminates at the cluster ingress. The server:
//! - binds the configured address, failing fast if the port is taken
//! - serves the router until SIGTERM/SIGINT, then drains in-flight requests

mod server;
mod shutdown;
pub mod static_files;

pub use server::{bind, serve, serve_with_shutdown, ServerError};
pub use shutdown::shutdown_signal;
