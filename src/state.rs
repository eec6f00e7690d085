//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The server is stateless beyond its configuration: every request works
//! directly against the uploads directory on disk.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the config is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config) }
    }
}
