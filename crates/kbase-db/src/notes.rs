//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use kbase_core::{CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest};

/// PostgreSQL implementation of NoteRepository.
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, created_at, updated_at FROM note ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(notes)
    }

    async fn fetch(&self, id: i64) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, created_at, updated_at FROM note WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(note)
    }

    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        let now = Utc::now();
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO note (title, content, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING id, title, content, created_at, updated_at",
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(note)
    }

    async fn update(&self, req: UpdateNoteRequest) -> Result<u64> {
        // Matches by id equality only; zero rows affected is reported, not
        // treated as an error.
        let result = sqlx::query(
            "UPDATE note SET title = $1, content = $2, updated_at = $3 WHERE id = $4",
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(Utc::now())
        .bind(req.id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(result.rows_affected())
    }
}
