use crate::config::{AdminConfig, Config};
use crate::db::DbActorHandle;
use crate::mail::Mailer;
use crate::sections::{ContentUpdates, Sections};
use crate::server::routes::{admin, contact, content, view};

use axum::{
    Router,
    extract::{FromRef, Request},
    http::{HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
};
use axum_extra::extract::cookie::Key;
use base64::Engine as _;
use rand::RngCore;
use std::sync::{Arc, LazyLock};
use std::time::Instant;
use tracing::{error, info, warn};
use vitrine_content::Entity;

/// Global cookie signing/encryption key for PrivateCookieJar. Generated per
/// process, so admin sessions do not survive a restart.
static COOKIE_KEY: LazyLock<Key> = LazyLock::new(Key::generate);

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[derive(Clone)]
pub struct VitrineState {
    pub db: Option<DbActorHandle>,
    pub sections: Arc<Sections>,
    pub updates: ContentUpdates,
    pub mailer: Arc<Mailer>,
    pub admin: Arc<AdminConfig>,
    pub insecure_cookie: bool,
}

impl VitrineState {
    pub fn new(db: Option<DbActorHandle>, cfg: &Config) -> Self {
        let updates = ContentUpdates::new();
        let sections = Arc::new(Sections::spawn(db.clone(), &updates));

        Self {
            db,
            sections,
            updates,
            mailer: Arc::new(Mailer::new(cfg.mail.clone())),
            admin: Arc::new(cfg.admin.clone()),
            insecure_cookie: cfg.basic.insecure_cookie,
        }
    }
}

impl FromRef<VitrineState> for Key {
    fn from_ref(state: &VitrineState) -> Self {
        let _ = state; // state not used to fetch the static key
        COOKIE_KEY.clone()
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let uri = req.uri().clone();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Always reflect `x-request-id` for easier correlation, even if the
    // client didn't send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    let path = uri.path();

    if status.is_server_error() {
        error!(
            "| {:>3} | {} | {:^7} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms,
            user_agent
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {} | {:^7} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms,
            user_agent
        );
    } else {
        info!(
            "| {:>3} | {} | {:^7} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            path,
            latency_ms,
            user_agent
        );
    }

    resp
}

pub fn vitrine_router(state: VitrineState) -> Router {
    // Every content route is registered literally from the closed entity
    // set; unknown slugs fall through to the 404 handler.
    let mut content_routes = Router::new();
    for entity in Entity::ALL {
        let slug = entity.slug();
        content_routes = content_routes
            .route(
                &format!("/api/{slug}"),
                get(content::read).post(content::create),
            )
            .route(
                &format!("/api/{slug}/{{id}}"),
                put(content::update).delete(content::remove),
            )
            .route(&format!("/api/view/{slug}"), get(view::section));
    }

    let admin_routes = Router::new()
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/verify", get(admin::verify))
        .route("/api/admin/logout", post(admin::logout));

    Router::new()
        .merge(content_routes)
        .merge(admin_routes)
        .route("/api/contact", post(contact::submit))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
