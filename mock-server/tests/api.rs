use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_users_empty() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/users").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_user_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"name":"Ann","email":"a@x.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "a@x.com");
    assert!(!user.id.is_empty());
}

#[tokio::test]
async fn create_user_malformed_payload_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/users", r#"{"name":"Ann"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_user_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/users/absent")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}

// --- echo ---

#[tokio::test]
async fn echo_returns_body_verbatim() {
    let app = app();
    let payload = r#"{"id":"1","name":"Ann","email":"a@x.com","createdAt":"2024-05-17T10:30:00Z"}"#;
    let resp = app
        .oneshot(json_request("POST", "/echo", payload))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/json"
    );
    let body = body_bytes(resp).await;
    assert_eq!(body.as_ref(), payload.as_bytes());
}

// --- health ---

#[tokio::test]
async fn health_has_no_body() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}

// --- create then get lifecycle ---

#[tokio::test]
async fn create_then_get_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/users",
            r#"{"name":"Ann","email":"a@x.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: User = body_json(resp).await;
    let id = created.id.clone();

    // list — should contain the one user
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/users").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, id);

    // get by id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(&format!("/users/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: User = body_json(resp).await;
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.name, "Ann");
    assert_eq!(fetched.email, "a@x.com");
    assert_eq!(fetched.created_at, created.created_at);
}
