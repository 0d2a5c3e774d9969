//! Script repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use kbase_core::{
    CreateScriptRequest, Error, Result, Script, ScriptRepository, UpdateScriptRequest,
};

/// PostgreSQL implementation of ScriptRepository.
pub struct PgScriptRepository {
    pool: Pool<Postgres>,
}

impl PgScriptRepository {
    /// Create a new PgScriptRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScriptRepository for PgScriptRepository {
    async fn list(&self) -> Result<Vec<Script>> {
        let scripts = sqlx::query_as::<_, Script>(
            "SELECT id, name, description, created_at, updated_at FROM script ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(scripts)
    }

    async fn fetch(&self, id: i64) -> Result<Option<Script>> {
        let script = sqlx::query_as::<_, Script>(
            "SELECT id, name, description, created_at, updated_at FROM script WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(script)
    }

    async fn insert(&self, req: CreateScriptRequest) -> Result<Script> {
        let now = Utc::now();
        let script = sqlx::query_as::<_, Script>(
            "INSERT INTO script (name, description, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING id, name, description, created_at, updated_at",
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(script)
    }

    async fn update(&self, req: UpdateScriptRequest) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE script SET name = $1, description = $2, updated_at = $3 WHERE id = $4",
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(Utc::now())
        .bind(req.id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM script WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(result.rows_affected())
    }
}
