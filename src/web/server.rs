//! HTTP server implementation.
//!
//! This module provides the axum-based HTTP server that serves the task UI
//! and exposes the JSON REST API.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, put},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use super::templates;
use crate::db::Database;
use crate::error::ApiError;
use crate::types::{NewTask, Task, TaskPatch};

/// Server state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Reference to the task database.
    db: Arc<Database>,
}

impl AppState {
    /// Create a new server state.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get the database reference.
    pub fn db(&self) -> &Arc<Database> {
        &self.db
    }
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Validate a description supplied on create or update.
///
/// Trims surrounding whitespace; the trimmed value is what gets stored.
fn validate_description(description: &str) -> Result<String, ApiError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid_value("description", "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Root endpoint - serves the task UI page.
async fn index() -> Html<&'static str> {
    Html(templates::INDEX_TEMPLATE)
}

/// List all tasks, newest first.
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.db().list_tasks()?;
    debug!(count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

/// Create a task from a non-empty description.
async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let description = match body.description.as_deref() {
        Some(d) => validate_description(d)?,
        None => return Err(ApiError::missing_field("description")),
    };

    let task = state.db().create_task(&description)?;
    info!(task_id = task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// Merge supplied fields onto a stored task.
async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(body): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::empty_update());
    }

    let description = body
        .description
        .as_deref()
        .map(validate_description)
        .transpose()?;

    let task = state
        .db()
        .update_task(task_id, description.as_deref(), body.completed)?
        .ok_or_else(|| ApiError::task_not_found(task_id))?;

    info!(task_id, "Task updated");
    Ok(Json(task))
}

/// Delete a task. 404 if the ID is unknown.
async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !state.db().delete_task(task_id)? {
        return Err(ApiError::task_not_found(task_id));
    }

    info!(task_id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// API root - returns available endpoints.
async fn api_root() -> impl IntoResponse {
    Json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "tasks": "/api/tasks",
        }
    }))
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // UI
        .route("/", get(index))
        // Task API
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{task_id}", put(update_task).delete(delete_task))
        // API routes
        .route("/api", get(api_root))
        .route("/api/health", get(health))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server in the foreground until ctrl-c.
pub async fn serve(db: Arc<Database>, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(db);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("taskdeck listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
