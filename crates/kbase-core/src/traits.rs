//! Repository traits for kbase record stores.
//!
//! These traits define the persistence interface the HTTP layer depends on,
//! enabling pluggable backends and testability. The contracts are deliberately
//! thin: every operation maps to a single relational statement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Note, Recipe, Script};

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Request for creating a new note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request for replacing a note, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List all notes in store order. Empty store yields an empty vec.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Fetch a note by id. `None` means no matching row, which is a distinct
    /// outcome from a store failure.
    async fn fetch(&self, id: i64) -> Result<Option<Note>>;

    /// Insert a new note; the store assigns id and both timestamps.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note>;

    /// Replace a note by id, refreshing `updated_at`. Returns rows affected;
    /// zero is not an error, the caller decides what it means.
    async fn update(&self, req: UpdateNoteRequest) -> Result<u64>;

    /// Hard-delete a note by id. Returns rows affected.
    async fn delete(&self, id: i64) -> Result<u64>;
}

// =============================================================================
// RECIPE REPOSITORY
// =============================================================================

/// Request for creating a new recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub category: String,
}

/// Request for replacing a recipe, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecipeRequest {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub category: String,
}

/// Repository for recipe CRUD operations.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// List all recipes in store order.
    async fn list(&self) -> Result<Vec<Recipe>>;

    /// Fetch a recipe by id.
    async fn fetch(&self, id: i64) -> Result<Option<Recipe>>;

    /// Insert a new recipe.
    async fn insert(&self, req: CreateRecipeRequest) -> Result<Recipe>;

    /// Replace a recipe by id. Returns rows affected.
    async fn update(&self, req: UpdateRecipeRequest) -> Result<u64>;

    /// Hard-delete a recipe by id. Returns rows affected.
    async fn delete(&self, id: i64) -> Result<u64>;
}

// =============================================================================
// SCRIPT REPOSITORY
// =============================================================================

/// Request for creating a new script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateScriptRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Request for replacing a script, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScriptRequest {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Repository for script CRUD operations.
#[async_trait]
pub trait ScriptRepository: Send + Sync {
    /// List all scripts in store order.
    async fn list(&self) -> Result<Vec<Script>>;

    /// Fetch a script by id.
    async fn fetch(&self, id: i64) -> Result<Option<Script>>;

    /// Insert a new script.
    async fn insert(&self, req: CreateScriptRequest) -> Result<Script>;

    /// Replace a script by id. Returns rows affected.
    async fn update(&self, req: UpdateScriptRequest) -> Result<u64>;

    /// Hard-delete a script by id. Returns rows affected.
    async fn delete(&self, id: i64) -> Result<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_note_request_defaults_missing_fields() {
        let req: CreateNoteRequest = serde_json::from_str(r#"{"title":"only a title"}"#).unwrap();
        assert_eq!(req.title, "only a title");
        assert_eq!(req.content, "");
    }

    #[test]
    fn test_update_note_request_requires_id() {
        let missing: std::result::Result<UpdateNoteRequest, _> =
            serde_json::from_str(r#"{"title":"no id"}"#);
        assert!(missing.is_err());

        let ok: UpdateNoteRequest =
            serde_json::from_str(r#"{"id":9,"title":"t","content":"c"}"#).unwrap();
        assert_eq!(ok.id, 9);
    }

    #[test]
    fn test_create_recipe_request_full_body() {
        let req: CreateRecipeRequest = serde_json::from_str(
            r#"{"name":"Adobo","description":"meat dish","instruction":"simmer","category":"main"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Adobo");
        assert_eq!(req.category, "main");
    }
}
