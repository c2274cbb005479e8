use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::{
    fs,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

#[tokio::test]
async fn content_routes_guard_mutations_and_round_trip() {
    // NOTE: `vitrine::db::spawn()` registers a singleton ractor actor by name
    // within a process. Keep this test file to a single test.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "vitrine-content-routes-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    let database_url = format!("sqlite:{}", temp_path.display());
    let db = vitrine::db::spawn(&database_url).await;

    let mut cfg = vitrine::config::Config::default();
    cfg.admin.password = "pwd".to_string();

    let state = vitrine::server::router::VitrineState::new(Some(db.clone()), &cfg);
    let app = vitrine::server::router::vitrine_router(state);

    // 1) public list read on an empty store -> 200 [].
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/education")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    // 2) public singleton read on an empty store -> 200 null.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/hero")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, Value::Null);

    // 3) mutation without a session -> 401, and nothing is written.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/education")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"degree":"PhD"}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(db.list(vitrine_content::Entity::Education)
        .await
        .expect("list failed")
        .is_empty());

    // 4) login to obtain the session cookie.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/login")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"password":"pwd"}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .expect("login did not set a cookie")
        .to_str()
        .expect("cookie header was not utf-8")
        .to_string();
    assert!(set_cookie.starts_with("admin_token="));
    assert!(set_cookie.contains("HttpOnly"));
    let cookie = set_cookie
        .split(';')
        .next()
        .expect("empty set-cookie header")
        .to_string();

    // 5) authenticated create -> 201 with the stored envelope.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/education")
                .header("content-type", "application/json")
                .header("cookie", &cookie)
                .body(Body::from(
                    r#"{"degree":"PhD in Computer Science","institution":"ETH"}"#,
                ))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_i64().expect("created row has no id");
    assert_eq!(created["order"], serde_json::json!(0));
    assert_eq!(created["degree"], serde_json::json!("PhD in Computer Science"));

    // 6) the public list now carries the row.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/education")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let listed = body_json(resp).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["institution"], serde_json::json!("ETH"));

    // 7) authenticated update merges fields.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/education/{id}"))
                .header("content-type", "application/json")
                .header("cookie", &cookie)
                .body(Body::from(r#"{"institution":"EPFL"}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["institution"], serde_json::json!("EPFL"));
    assert_eq!(updated["degree"], serde_json::json!("PhD in Computer Science"));

    // 8) malformed JSON body on a guarded route is a server-side error.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/education")
                .header("content-type", "application/json")
                .header("cookie", &cookie)
                .body(Body::from("not-json"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // 9) authenticated delete -> {"success":true} and the row is gone.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/education/{id}"))
                .header("cookie", &cookie)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({ "success": true }));

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/education")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    // 10) unknown content slugs are 404s.
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/secrets")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let _ = fs::remove_file(&temp_path);
}
