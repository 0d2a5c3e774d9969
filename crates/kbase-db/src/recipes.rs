//! Recipe repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use kbase_core::{
    CreateRecipeRequest, Error, Recipe, RecipeRepository, Result, UpdateRecipeRequest,
};

/// PostgreSQL implementation of RecipeRepository.
pub struct PgRecipeRepository {
    pool: Pool<Postgres>,
}

impl PgRecipeRepository {
    /// Create a new PgRecipeRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, description, instruction, category, created_at, updated_at
             FROM recipe ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(recipes)
    }

    async fn fetch(&self, id: i64) -> Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, description, instruction, category, created_at, updated_at
             FROM recipe WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(recipe)
    }

    async fn insert(&self, req: CreateRecipeRequest) -> Result<Recipe> {
        let now = Utc::now();
        let recipe = sqlx::query_as::<_, Recipe>(
            "INSERT INTO recipe (name, description, instruction, category, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING id, name, description, instruction, category, created_at, updated_at",
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.instruction)
        .bind(&req.category)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(recipe)
    }

    async fn update(&self, req: UpdateRecipeRequest) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE recipe SET name = $1, description = $2, instruction = $3, category = $4,
             updated_at = $5 WHERE id = $6",
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.instruction)
        .bind(&req.category)
        .bind(Utc::now())
        .bind(req.id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM recipe WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(result.rows_affected())
    }
}
