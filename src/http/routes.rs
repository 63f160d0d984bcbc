//! User routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::ApiError;
use crate::record::Record;
use crate::store::RecordStore;

/// Body of a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Always `"OK"`.
    pub status: &'static str,
    /// The stored record, id included.
    pub user: Record,
}

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// Always `"OK"`.
    pub status: &'static str,
    /// Id of the removed record.
    pub deleted_id: u64,
}

/// Greeting plus the `/users` collection, backed by `store`.
pub fn user_routes(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/", get(hello_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/:id", get(get_user_handler).delete(delete_user_handler))
        .with_state(store)
}

/// Run a store call on the blocking pool; file I/O and the writer lock stay
/// off the async workers.
async fn run_blocking<T, F>(store: Arc<RecordStore>, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&RecordStore) -> crate::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

// Ids are positive integers; any other path segment can't name a user.
fn user_id(id: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    id.map(|Path(id)| id).map_err(|_| ApiError::NotFound)
}

async fn hello_handler() -> &'static str {
    "Welcome to the User API!"
}

async fn list_users_handler(
    State(store): State<Arc<RecordStore>>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let users = run_blocking(store, |s| s.list()).await?;
    Ok(Json(users))
}

async fn create_user_handler(
    State(store): State<Arc<RecordStore>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(candidate) = body.map_err(|rejection| {
        debug!(%rejection, "create body rejected");
        ApiError::UnsupportedContent
    })?;

    let user = run_blocking(store, move |s| s.create(&candidate)).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { status: "OK", user }),
    ))
}

async fn get_user_handler(
    State(store): State<Arc<RecordStore>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Record>, ApiError> {
    let id = user_id(id)?;
    let user = run_blocking(store, move |s| s.get(id)).await?;
    Ok(Json(user))
}

async fn delete_user_handler(
    State(store): State<Arc<RecordStore>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = user_id(id)?;
    let deleted_id = run_blocking(store, move |s| s.delete(id)).await?;
    Ok(Json(DeletedResponse {
        status: "OK",
        deleted_id,
    }))
}
