use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    // No mail provider configured: submissions validate, then log-and-accept.
    let cfg = vitrine::config::Config::default();
    let state = vitrine::server::router::VitrineState::new(None, &cfg);
    vitrine::server::router::vitrine_router(state)
}

fn submit(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

#[tokio::test]
async fn short_name_is_rejected() {
    let resp = app()
        .oneshot(submit(json!({
            "name": "A",
            "email": "a@b.co",
            "subject": "Hello",
            "message": "a message long enough"
        })))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "success": false, "message": "Name must be at least 2 characters" })
    );
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let resp = app()
        .oneshot(submit(json!({
            "name": "Ada",
            "email": "not-an-email",
            "subject": "Hello",
            "message": "a message long enough"
        })))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "success": false, "message": "Invalid email address" })
    );
}

#[tokio::test]
async fn message_length_boundary_is_ten_characters() {
    let resp = app()
        .oneshot(submit(json!({
            "name": "Ada",
            "email": "a@b.co",
            "subject": "Hello",
            "message": "123456789"
        })))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app()
        .oneshot(submit(json!({
            "name": "Ada",
            "email": "a@b.co",
            "subject": "Hello",
            "message": "1234567890"
        })))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn valid_submission_succeeds_without_a_mail_provider() {
    let resp = app()
        .oneshot(submit(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.org",
            "subject": "Collaboration",
            "message": "I would like to discuss a collaboration."
        })))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["message"]
        .as_str()
        .is_some_and(|m| m.contains("email not configured")));
}

#[tokio::test]
async fn missing_fields_default_to_empty_and_fail_validation() {
    let resp = app()
        .oneshot(submit(json!({})))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
