//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use tera::Tera;

use blogly_core::BlogService;
use blogly_core::ports::{PostRepository, UserRepository};
use blogly_infra::InMemoryBlogStore;

#[cfg(feature = "postgres")]
use blogly_infra::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};

use crate::config::AppConfig;

type Repositories = (Arc<dyn UserRepository>, Arc<dyn PostRepository>);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub templates: Arc<Tera>,
    pub recent_posts_limit: u64,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, tera::Error> {
        let templates = load_templates(&config.templates_dir)?;
        let (users, posts) = repositories(config).await;

        tracing::info!("Application state initialized");

        Ok(Self::from_parts(
            BlogService::new(users, posts),
            templates,
            config.recent_posts_limit,
        ))
    }

    pub fn from_parts(blog: BlogService, templates: Tera, recent_posts_limit: u64) -> Self {
        Self {
            blog,
            templates: Arc::new(templates),
            recent_posts_limit,
        }
    }
}

/// Load every `.html` template under `dir`.
pub fn load_templates(dir: &Path) -> Result<Tera, tera::Error> {
    let glob = format!("{}/**/*.html", dir.display());
    let tera = Tera::new(&glob)?;
    tracing::debug!(
        templates = tera.get_template_names().count(),
        "Templates loaded from {}",
        dir.display()
    );
    Ok(tera)
}

#[cfg(feature = "postgres")]
async fn repositories(config: &AppConfig) -> Repositories {
    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return InMemoryBlogStore::shared();
    };

    match DatabaseConnections::init(db_config).await {
        Ok(connections) => {
            let users: Arc<dyn UserRepository> =
                Arc::new(PostgresUserRepository::new(connections.main.clone()));
            let posts: Arc<dyn PostRepository> =
                Arc::new(PostgresPostRepository::new(connections.main));
            (users, posts)
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            InMemoryBlogStore::shared()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn repositories(_config: &AppConfig) -> Repositories {
    tracing::info!("Running without postgres feature - using in-memory store");
    InMemoryBlogStore::shared()
}
