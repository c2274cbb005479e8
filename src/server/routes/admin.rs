use crate::auth;
use crate::error::VitrineError;
use crate::server::guards::SESSION_COOKIE;
use crate::server::router::VitrineState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;
use time::Duration;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

fn session_cookie(token: String, insecure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(!insecure)
        .path("/")
        .max_age(Duration::days(7))
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// POST `/api/admin/login`
pub async fn login(
    State(state): State<VitrineState>,
    jar: PrivateCookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<Response, VitrineError> {
    if req.password.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "Password required" })),
        )
            .into_response());
    }

    if !auth::verify_password(&state.admin, &req.password) {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Invalid password" })),
        )
            .into_response());
    }

    let token = auth::mint_session_token();
    let jar = jar.add(session_cookie(token.clone(), state.insecure_cookie));

    info!("admin session opened");
    Ok((jar, Json(json!({ "success": true, "token": token }))).into_response())
}

/// GET `/api/admin/verify`
pub async fn verify(jar: PrivateCookieJar) -> Response {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => {
            Json(json!({ "authenticated": true })).into_response()
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "authenticated": false })),
        )
            .into_response(),
    }
}

/// POST `/api/admin/logout`
pub async fn logout(jar: PrivateCookieJar) -> Response {
    let jar = jar.remove(removal_cookie());
    info!("admin session closed");
    (jar, Json(json!({ "success": true }))).into_response()
}
