use crate::server::router::VitrineState;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};
use serde_json::json;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "admin_token";

/// Guard for mutating routes: the request must carry a decryptable,
/// non-empty `admin_token` cookie. The cookie jar's signature check is the
/// integrity guarantee; the token body stays opaque. Rejection happens
/// before any body is read, so a refused call has no side effect.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<VitrineState> for RequireAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &VitrineState,
    ) -> Result<Self, Self::Rejection> {
        let jar: PrivateCookieJar<Key> = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthError::MissingSession)?;

        match jar.get(SESSION_COOKIE) {
            Some(cookie) if !cookie.value().is_empty() => Ok(RequireAdmin),
            _ => Err(AuthError::MissingSession),
        }
    }
}

pub enum AuthError {
    MissingSession,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let AuthError::MissingSession = self;
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response()
    }
}
