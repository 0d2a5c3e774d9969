//! # kbase-db
//!
//! PostgreSQL database layer for kbase.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for the three record kinds
//! - Schema migrations (behind the `migrations` feature)
//! - Startup seed fixtures
//!
//! ## Example
//!
//! ```rust,ignore
//! use kbase_db::{Database, CreateNoteRequest, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/kbase").await?;
//!
//!     let note = db.notes.insert(CreateNoteRequest {
//!         title: "Hello".to_string(),
//!         content: "First note".to_string(),
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;
pub mod recipes;
pub mod scripts;
pub mod seed;

// Re-export core types
pub use kbase_core::*;

// Re-export repository implementations
pub use notes::PgNoteRepository;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use recipes::PgRecipeRepository;
pub use scripts::PgScriptRepository;
pub use seed::seed_fixtures;

/// Combined database context with all repositories.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for CRUD operations.
    pub notes: PgNoteRepository,
    /// Recipe repository for CRUD operations.
    pub recipes: PgRecipeRepository,
    /// Script repository for CRUD operations.
    pub scripts: PgScriptRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            recipes: PgRecipeRepository::new(pool.clone()),
            scripts: PgScriptRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}
