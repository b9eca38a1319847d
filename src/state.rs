//! Shared application state for request handlers.

use std::sync::Arc;

use crate::assets::AssetStore;
use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Both halves are built before the listener is bound and never change
/// afterwards, so handlers read them without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub assets: Arc<AssetStore>,
}

impl AppState {
    /// Creates a new application state from the given configuration and asset store.
    pub fn new(config: AppConfig, assets: AssetStore) -> Self {
        Self {
            config: Arc::new(config),
            assets: Arc::new(assets),
        }
    }
}
