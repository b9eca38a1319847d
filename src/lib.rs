//! coursehub: a small course catalogue site.
//!
//! The server renders a fixed set of pages from a read-only asset directory.
//! It is the application half of a container and GitOps delivery demo; the
//! Dockerfile, Helm chart, CI workflow and Argo CD application live beside
//! the crate.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use assets::{AssetError, AssetStore};
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
