//! Core data models for kbase.
//!
//! These types are shared across all kbase crates and represent the three
//! record kinds the service persists. They are plain data containers; ids and
//! timestamps are assigned by the store, never by callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// NOTE
// =============================================================================

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// RECIPE
// =============================================================================

/// A cooking recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub instruction: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// SCRIPT
// =============================================================================

/// A saved script or snippet reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Script {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        Note {
            id: 7,
            title: "Sample note 1".to_string(),
            content: "Some description about sample note 1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_note_json_round_trip() {
        let note = sample_note();
        let json = serde_json::to_string(&note).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, parsed);
    }

    #[test]
    fn test_note_json_field_names() {
        let note = sample_note();
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("id").is_some());
        assert!(value.get("title").is_some());
        assert!(value.get("content").is_some());
        assert!(value.get("created_at").is_some());
        assert!(value.get("updated_at").is_some());
    }

    #[test]
    fn test_recipe_json_round_trip() {
        let recipe = Recipe {
            id: 1,
            name: "Adobo".to_string(),
            description: "A meat dish with soy sauce, vinegar, garlic, and peppercorns."
                .to_string(),
            instruction: String::new(),
            category: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe, parsed);
    }

    #[test]
    fn test_script_json_round_trip() {
        let script = Script {
            id: 3,
            name: "Sample script 3".to_string(),
            description: "Some description about sample script 3".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&script).unwrap();
        let parsed: Script = serde_json::from_str(&json).unwrap();
        assert_eq!(script, parsed);
    }
}
