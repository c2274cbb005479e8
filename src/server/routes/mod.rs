pub mod admin;
pub mod contact;
pub mod content;
pub mod view;

use crate::error::VitrineError;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use vitrine_content::Entity;

/// Extracts the content entity from the request path (`/api/{slug}` or
/// `/api/view/{slug}`). Routes are registered literally from `Entity::ALL`,
/// so the slug always resolves; an unmatched slug rejects with 404.
#[derive(Debug, Clone, Copy)]
pub struct ContentEntity(pub Entity);

impl<S: Send + Sync> FromRequestParts<S> for ContentEntity {
    type Rejection = VitrineError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut segments = parts.uri.path().trim_start_matches('/').split('/');
        let _api = segments.next();
        let first = segments.next().unwrap_or("");
        let slug = if first == "view" {
            segments.next().unwrap_or("")
        } else {
            first
        };

        Entity::from_slug(slug)
            .map(ContentEntity)
            .ok_or_else(|| VitrineError::UnknownEntity(slug.to_string()))
    }
}
