use serde::Deserialize;
use std::env;

use crate::allocator::MAX_GROUP_SIZE;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub allocator: AllocatorConfig,
    pub features: FeatureFlags,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Allocator limits
#[derive(Debug, Clone, Deserialize)]
pub struct AllocatorConfig {
    /// Per-request cap on the suggested group size; never above the
    /// allocator's own hard limit.
    pub max_group: u32,
}

// Feature flags
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Expose POST /api/suggest, which accepts a full layout in the body.
    pub enable_stateless_suggest: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seatpick=debug,tower_http=debug".to_string()),
            },
            allocator: AllocatorConfig {
                max_group: env::var("ALLOCATOR_MAX_GROUP")
                    .unwrap_or_else(|_| MAX_GROUP_SIZE.to_string())
                    .parse::<u32>()
                    .expect("ALLOCATOR_MAX_GROUP must be a valid number")
                    .min(MAX_GROUP_SIZE),
            },
            features: FeatureFlags {
                enable_stateless_suggest: env::var("ENABLE_STATELESS_SUGGEST")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("ENABLE_STATELESS_SUGGEST must be true or false"),
            },
        }
    }
}
