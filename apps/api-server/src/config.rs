//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use murmur_core::pagination::DEFAULT_PAGE_SIZE;
use murmur_core::service::DEFAULT_SNAPSHOT_TTL;
use murmur_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub redis_url: Option<String>,
    /// Posts per feed page.
    pub page_size: usize,
    /// How long the landing feed snapshot stays cached.
    pub feed_cache_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            redis_url: env::var("REDIS_URL").ok(),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            feed_cache_ttl: env::var("FEED_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_SNAPSHOT_TTL),
        }
    }
}
