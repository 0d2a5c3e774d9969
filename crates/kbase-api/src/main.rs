//! kbase-api - HTTP API server for the kbase knowledge base.
//!
//! One collection path per record kind (`/notes`, `/recipes`, `/scripts`),
//! each carrying the full verb set: GET lists all rows or, with an `id` query
//! parameter, fetches one; POST creates; PUT replaces by id; DELETE removes by
//! id. Any other verb gets 405 from the method router without touching the
//! store.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kbase_core::{
    CreateNoteRequest, CreateRecipeRequest, CreateScriptRequest, NoteRepository, RecipeRepository,
    ScriptRepository, UpdateNoteRequest, UpdateRecipeRequest, UpdateScriptRequest,
};
use kbase_db::Database;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared handler state: one repository handle per record kind.
///
/// Trait objects rather than the concrete database context, so the store can
/// be swapped for a recording double in tests.
#[derive(Clone)]
struct AppState {
    notes: Arc<dyn NoteRepository>,
    recipes: Arc<dyn RecipeRepository>,
    scripts: Arc<dyn ScriptRepository>,
}

impl AppState {
    fn new(db: Database) -> Self {
        Self {
            notes: Arc::new(db.notes),
            recipes: Arc::new(db.recipes),
            scripts: Arc::new(db.scripts),
        }
    }
}

/// Query parameters accepted by the collection GET and DELETE handlers.
#[derive(Debug, Deserialize)]
struct RecordQuery {
    id: Option<i64>,
}

// =============================================================================
// ROUTER
// =============================================================================

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route(
            "/notes",
            get(list_notes)
                .post(create_note)
                .put(update_note)
                .delete(delete_note),
        )
        .route(
            "/recipes",
            get(list_recipes)
                .post(create_recipe)
                .put(update_recipe)
                .delete(delete_recipe),
        )
        .route(
            "/scripts",
            get(list_scripts)
                .post(create_script)
                .put(update_script)
                .delete(delete_script),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Home page, kept for compatibility with the service this replaces.
async fn home() -> &'static str {
    "Welcome to the HomePage!"
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// =============================================================================
// NOTE HANDLERS
// =============================================================================

/// List all notes, or fetch one when `?id=` is given.
async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> Result<Response, ApiError> {
    match query.id {
        Some(id) => {
            let note = state
                .notes
                .fetch(id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Note {} not found", id)))?;
            Ok(Json(note).into_response())
        }
        None => Ok(Json(state.notes.list().await?).into_response()),
    }
}

/// Create a note from a JSON body.
async fn create_note(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    // Decoded by hand: a malformed body surfaces as 500, matching the
    // observed behavior of the service this replaces.
    let req: CreateNoteRequest = serde_json::from_slice(&body).map_err(kbase_core::Error::from)?;
    state.notes.insert(req).await?;
    Ok(StatusCode::CREATED)
}

/// Replace a note by the id carried in the body.
async fn update_note(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let req: UpdateNoteRequest = serde_json::from_slice(&body).map_err(kbase_core::Error::from)?;
    let id = req.id;
    let affected = state.notes.update(req).await?;
    if affected == 0 {
        // Known gap: success is reported even when no row matched.
        warn!(entity = "note", id, "update matched no rows");
    }
    Ok(StatusCode::OK)
}

/// Delete a note by the required `id` query parameter.
async fn delete_note(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> Result<StatusCode, ApiError> {
    let id = query
        .id
        .ok_or_else(|| ApiError::BadRequest("missing required parameter: id".to_string()))?;
    let affected = state.notes.delete(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound(format!("Note {} not found", id)));
    }
    Ok(StatusCode::OK)
}

// =============================================================================
// RECIPE HANDLERS
// =============================================================================

/// List all recipes, or fetch one when `?id=` is given.
async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> Result<Response, ApiError> {
    match query.id {
        Some(id) => {
            let recipe = state
                .recipes
                .fetch(id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Recipe {} not found", id)))?;
            Ok(Json(recipe).into_response())
        }
        None => Ok(Json(state.recipes.list().await?).into_response()),
    }
}

/// Create a recipe from a JSON body.
async fn create_recipe(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let req: CreateRecipeRequest =
        serde_json::from_slice(&body).map_err(kbase_core::Error::from)?;
    state.recipes.insert(req).await?;
    Ok(StatusCode::CREATED)
}

/// Replace a recipe by the id carried in the body.
async fn update_recipe(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let req: UpdateRecipeRequest =
        serde_json::from_slice(&body).map_err(kbase_core::Error::from)?;
    let id = req.id;
    let affected = state.recipes.update(req).await?;
    if affected == 0 {
        warn!(entity = "recipe", id, "update matched no rows");
    }
    Ok(StatusCode::OK)
}

/// Delete a recipe by the required `id` query parameter.
async fn delete_recipe(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> Result<StatusCode, ApiError> {
    let id = query
        .id
        .ok_or_else(|| ApiError::BadRequest("missing required parameter: id".to_string()))?;
    let affected = state.recipes.delete(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound(format!("Recipe {} not found", id)));
    }
    Ok(StatusCode::OK)
}

// =============================================================================
// SCRIPT HANDLERS
// =============================================================================

/// List all scripts, or fetch one when `?id=` is given.
async fn list_scripts(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> Result<Response, ApiError> {
    match query.id {
        Some(id) => {
            let script = state
                .scripts
                .fetch(id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Script {} not found", id)))?;
            Ok(Json(script).into_response())
        }
        None => Ok(Json(state.scripts.list().await?).into_response()),
    }
}

/// Create a script from a JSON body.
async fn create_script(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let req: CreateScriptRequest =
        serde_json::from_slice(&body).map_err(kbase_core::Error::from)?;
    state.scripts.insert(req).await?;
    Ok(StatusCode::CREATED)
}

/// Replace a script by the id carried in the body.
async fn update_script(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let req: UpdateScriptRequest =
        serde_json::from_slice(&body).map_err(kbase_core::Error::from)?;
    let id = req.id;
    let affected = state.scripts.update(req).await?;
    if affected == 0 {
        warn!(entity = "script", id, "update matched no rows");
    }
    Ok(StatusCode::OK)
}

/// Delete a script by the required `id` query parameter.
async fn delete_script(
    State(state): State<AppState>,
    Query(query): Query<RecordQuery>,
) -> Result<StatusCode, ApiError> {
    let id = query
        .id
        .ok_or_else(|| ApiError::BadRequest("missing required parameter: id".to_string()))?;
    let affected = state.scripts.delete(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound(format!("Script {} not found", id)));
    }
    Ok(StatusCode::OK)
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[derive(Debug)]
enum ApiError {
    Store(kbase_core::Error),
    NotFound(String),
    BadRequest(String),
}

impl From<kbase_core::Error> for ApiError {
    fn from(err: kbase_core::Error) -> Self {
        match &err {
            kbase_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            kbase_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            _ => ApiError::Store(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Store(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        // Error bodies are plain text; structured responses are JSON.
        (status, message).into_response()
    }
}

// =============================================================================
// MAIN
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kbase_api=debug,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;

    // Connect to database
    info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    info!("Database connected");

    // Run pending database migrations on startup
    info!("Running database migrations...");
    db.migrate().await?;
    info!("Database migrations complete");

    // Seed database
    if config.seed_fixtures {
        info!("Seeding fixture records...");
        kbase_db::seed_fixtures(&db).await?;
    }

    let app = router(AppState::new(db));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
