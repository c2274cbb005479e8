use crate::error::VitrineError;
use crate::server::router::VitrineState;
use crate::server::routes::ContentEntity;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

/// GET `/api/view/{entity}` — the resolved public read model.
///
/// Serves `{ "source": "live"|"fallback", "data": ... }` from the section
/// binding cache, waiting out an in-flight refresh rather than serving
/// stale content.
pub async fn section(
    State(state): State<VitrineState>,
    ContentEntity(entity): ContentEntity,
) -> Result<Response, VitrineError> {
    let resolved = state.sections.resolve(entity).await?;
    Ok(Json(resolved).into_response())
}
