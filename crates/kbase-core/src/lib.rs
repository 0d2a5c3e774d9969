//! # kbase-core
//!
//! Core types, traits, and abstractions for the kbase knowledge base service.
//!
//! This crate provides:
//! - The shared `Error`/`Result` types
//! - Entity models for the three record kinds (notes, recipes, scripts)
//! - Repository traits the HTTP layer is written against

pub mod error;
pub mod models;
pub mod traits;

pub use error::{Error, Result};
pub use models::{Note, Recipe, Script};
pub use traits::{
    CreateNoteRequest, CreateRecipeRequest, CreateScriptRequest, NoteRepository, RecipeRepository,
    ScriptRepository, UpdateNoteRequest, UpdateRecipeRequest, UpdateScriptRequest,
};
