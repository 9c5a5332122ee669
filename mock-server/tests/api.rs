use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, Comment, User};
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

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Routers share their state across clones, so one `app()` can serve a
/// sequence of requests.
async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

const COMMENT: &str = r#"{"postId":1,"name":"a","email":"a@x.com","body":"hi"}"#;
const USER: &str = r#"{"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz"}"#;

// --- list ---

#[tokio::test]
async fn list_comments_empty() {
    let resp = send(&app(), empty_request("GET", "/comments")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let comments: Vec<Comment> = body_json(resp).await;
    assert!(comments.is_empty());
}

#[tokio::test]
async fn list_preserves_ascending_id_order() {
    let app = app();
    for _ in 0..3 {
        send(&app, json_request("POST", "/users", USER)).await;
    }
    let users: Vec<User> = body_json(send(&app, empty_request("GET", "/users")).await).await;
    let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// --- create ---

#[tokio::test]
async fn create_comment_returns_201_with_id() {
    let resp = send(&app(), json_request("POST", "/comments", COMMENT)).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let comment: Comment = body_json(resp).await;
    assert_eq!(comment.id, 1);
    assert_eq!(comment.post_id, 1);
    assert_eq!(comment.body, "hi");
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let resp = send(
        &app(),
        json_request(
            "POST",
            "/comments",
            r#"{"id":77,"postId":1,"name":"a","email":"a@x.com","body":"hi"}"#,
        ),
    )
    .await;

    let comment: Comment = body_json(resp).await;
    assert_eq!(comment.id, 1);
}

#[tokio::test]
async fn create_user_keeps_nested_fields() {
    let resp = send(
        &app(),
        json_request(
            "POST",
            "/users",
            r#"{"name":"n","username":"u","email":"e@x.com","company":{"name":"c","catchPhrase":"p","bs":"b"}}"#,
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.company.unwrap()["catchPhrase"], "p");
}

#[tokio::test]
async fn create_comment_malformed_json_returns_422() {
    let resp = send(&app(), json_request("POST", "/comments", r#"{"name":1}"#)).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_user_not_found() {
    let resp = send(&app(), empty_request("GET", "/users/999999")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn get_comment_bad_id_returns_400() {
    let resp = send(&app(), empty_request("GET", "/comments/not-a-number")).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_comment_not_found() {
    let resp = send(&app(), json_request("PUT", "/comments/5", COMMENT)).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_user_not_found() {
    let resp = send(&app(), empty_request("DELETE", "/users/1")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let app = app();

    // create
    let resp = send(&app, json_request("POST", "/comments", COMMENT)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Comment = body_json(resp).await;
    let id = created.id;

    // list
    let resp = send(&app, empty_request("GET", "/comments")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let comments: Vec<Comment> = body_json(resp).await;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, id);

    // get
    let resp = send(&app, empty_request("GET", &format!("/comments/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Comment = body_json(resp).await;
    assert_eq!(fetched.name, "a");

    // replace; the id in the body is overridden by the path
    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/comments/{id}"),
            r#"{"id":999,"postId":2,"name":"b","email":"b@x.com","body":"bye"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Comment = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.post_id, 2);
    assert_eq!(updated.body, "bye");

    // delete
    let resp = send(&app, empty_request("DELETE", &format!("/comments/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({}));

    // get after delete
    let resp = send(&app, empty_request("GET", &format!("/comments/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // users are a separate collection
    let resp = send(&app, empty_request("GET", "/users")).await;
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}
