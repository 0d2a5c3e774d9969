//! Startup seed fixtures.
//!
//! Inserts a fixed sample set (3 rows per record kind) when seeding is
//! requested at startup. Seeding is not idempotent: each invocation inserts a
//! fresh copy of the fixtures.

use tracing::info;

use kbase_core::{
    CreateNoteRequest, CreateRecipeRequest, CreateScriptRequest, NoteRepository, RecipeRepository,
    Result, ScriptRepository,
};

use crate::Database;

/// The fixed note fixtures.
pub fn sample_notes() -> Vec<CreateNoteRequest> {
    (1..=3)
        .map(|n| CreateNoteRequest {
            title: format!("Sample note {}", n),
            content: format!("Some description about sample note {}", n),
        })
        .collect()
}

/// The fixed recipe fixtures.
pub fn sample_recipes() -> Vec<CreateRecipeRequest> {
    vec![
        CreateRecipeRequest {
            name: "Adobo".to_string(),
            description: "A meat dish with soy sauce, vinegar, garlic, and peppercorns."
                .to_string(),
            instruction: String::new(),
            category: String::new(),
        },
        CreateRecipeRequest {
            name: "Rice ball".to_string(),
            description: "A simple snack made of rice, seaweed, and fillings.".to_string(),
            instruction: String::new(),
            category: String::new(),
        },
        CreateRecipeRequest {
            name: "Chicken curry".to_string(),
            description: "A chicken dish with potatoes, carrots, and breaded fried chicken."
                .to_string(),
            instruction: String::new(),
            category: String::new(),
        },
    ]
}

/// The fixed script fixtures.
pub fn sample_scripts() -> Vec<CreateScriptRequest> {
    (1..=3)
        .map(|n| CreateScriptRequest {
            name: format!("Sample script {}", n),
            description: format!("Some description about sample script {}", n),
        })
        .collect()
}

/// Insert the full fixture set through the database context.
pub async fn seed_fixtures(db: &Database) -> Result<()> {
    for req in sample_notes() {
        db.notes.insert(req).await?;
    }
    for req in sample_recipes() {
        db.recipes.insert(req).await?;
    }
    for req in sample_scripts() {
        db.scripts.insert(req).await?;
    }

    info!(
        subsystem = "database",
        component = "seed",
        "Seeded sample notes, recipes, and scripts"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_fixtures_per_kind() {
        assert_eq!(sample_notes().len(), 3);
        assert_eq!(sample_recipes().len(), 3);
        assert_eq!(sample_scripts().len(), 3);
    }

    #[test]
    fn test_recipe_fixture_names() {
        let names: Vec<String> = sample_recipes().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Adobo", "Rice ball", "Chicken curry"]);
    }

    #[test]
    fn test_note_fixtures_are_numbered() {
        let notes = sample_notes();
        assert_eq!(notes[0].title, "Sample note 1");
        assert_eq!(notes[2].content, "Some description about sample note 3");
    }
}
