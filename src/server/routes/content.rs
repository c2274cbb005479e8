use crate::error::VitrineError;
use crate::server::guards::RequireAdmin;
use crate::server::router::VitrineState;
use crate::server::routes::ContentEntity;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::error;
use vitrine_content::EntityKind;

/// GET `/api/{entity}` — public.
///
/// Read failures and an unconfigured store degrade to an empty result with
/// HTTP 200 (empty array for lists, `null` for singletons) so the public
/// site's fallback path activates instead of an error state.
pub async fn read(
    State(state): State<VitrineState>,
    ContentEntity(entity): ContentEntity,
) -> Response {
    match entity.kind() {
        EntityKind::List => {
            let rows = match &state.db {
                Some(db) => match db.list(entity).await {
                    Ok(rows) => rows,
                    Err(err) => {
                        error!(entity = %entity, error = %err, "list read failed; returning empty set");
                        Vec::new()
                    }
                },
                None => Vec::new(),
            };
            Json(Value::Array(rows)).into_response()
        }
        EntityKind::Singleton => {
            let row = match &state.db {
                Some(db) => match db.first(entity).await {
                    Ok(row) => row,
                    Err(err) => {
                        error!(entity = %entity, error = %err, "singleton read failed; returning null");
                        None
                    }
                },
                None => None,
            };
            Json(row.unwrap_or(Value::Null)).into_response()
        }
    }
}

/// POST `/api/{entity}` — admin only. Broadcasts one content-update signal
/// on success.
pub async fn create(
    State(state): State<VitrineState>,
    ContentEntity(entity): ContentEntity,
    _admin: RequireAdmin,
    body: String,
) -> Result<Response, VitrineError> {
    let payload: Value = serde_json::from_str(&body)?;
    let db = state.db.as_ref().ok_or(VitrineError::StorageUnconfigured)?;

    let created = db.insert(entity, payload).await?;
    state.updates.publish();

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

/// PUT `/api/{entity}/{id}` — admin only. Broadcasts one content-update
/// signal on success.
pub async fn update(
    State(state): State<VitrineState>,
    ContentEntity(entity): ContentEntity,
    Path(id): Path<i64>,
    _admin: RequireAdmin,
    body: String,
) -> Result<Response, VitrineError> {
    let payload: Value = serde_json::from_str(&body)?;
    let db = state.db.as_ref().ok_or(VitrineError::StorageUnconfigured)?;

    let updated = db.update(entity, id, payload).await?;
    state.updates.publish();

    Ok(Json(updated).into_response())
}

/// DELETE `/api/{entity}/{id}` — admin only. Deletes do not publish a
/// content-update signal; mounted sections keep their cache until the next
/// signal arrives.
pub async fn remove(
    State(state): State<VitrineState>,
    ContentEntity(entity): ContentEntity,
    Path(id): Path<i64>,
    _admin: RequireAdmin,
) -> Result<Response, VitrineError> {
    let db = state.db.as_ref().ok_or(VitrineError::StorageUnconfigured)?;
    db.delete(entity, id).await?;

    Ok(Json(json!({ "success": true })).into_response())
}
