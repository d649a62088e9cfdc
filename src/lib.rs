pub mod allocator;
pub mod config;
pub mod controllers;
pub mod models;
pub mod registry;

use std::sync::Arc;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub halls: registry::HallRegistry,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            halls: registry::HallRegistry::new(),
            config,
        })
    }
}
