//! Application configuration loaded from environment variables.
//!
//! Built once in `main` and handed to whatever needs it; nothing reads the
//! environment after startup.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use blogly_infra::DatabaseConfig;

/// Number of posts on the list page and under the 404 page.
pub const DEFAULT_RECENT_POSTS: u64 = 5;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub recent_posts_limit: u64,
    pub templates_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut db = DatabaseConfig::new(url);
            db.max_connections = parse_var("DB_MAX_CONNECTIONS").unwrap_or(db.max_connections);
            db.min_connections = parse_var("DB_MIN_CONNECTIONS").unwrap_or(db.min_connections);
            db.log_statements = parse_var("DB_LOG_STATEMENTS").unwrap_or(false);
            db
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            recent_posts_limit: parse_var("RECENT_POSTS_LIMIT").unwrap_or(DEFAULT_RECENT_POSTS),
            templates_dir: env::var("TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_templates_dir()),
        }
    }
}

/// The `templates/` directory shipped with this crate.
pub fn default_templates_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
