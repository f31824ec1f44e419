//! Router-level tests: requests go through the full axum stack without a
//! socket.

mod mocks;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use contact_manager::repositories::{ContactRepository, InMemoryContactRepository};
use contact_manager::services::{ContactService, ContactServiceImpl};
use contact_manager::{router, AppState};
use mocks::MockContactRepository;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(repository: Arc<dyn ContactRepository>) -> Router {
    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
    router(AppState::new(service))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryContactRepository::new()))
}

fn contact_json(first: &str, last: &str, email: &str) -> Value {
    json!({
        "firstName": first,
        "lastName": last,
        "email": email,
        "phone": "555-0100",
        "company": "Acme",
        "jobTitle": "Engineer"
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, first: &str, last: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/contacts",
        Some(contact_json(first, last, email)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_create_returns_201_with_id() {
    let app = app();
    let body = create(&app, "Ada", "Lovelace", "ada@example.com").await;

    assert!(body["_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["jobTitle"], "Engineer");
}

#[tokio::test]
async fn test_create_with_trailing_slash() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/contacts/",
        Some(contact_json("Ada", "Lovelace", "ada@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/contacts/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalContacts"], 1);
}

#[tokio::test]
async fn test_create_validation_errors() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/contacts",
        Some(json!({ "firstName": "Ada", "email": "nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["message"].as_array().unwrap();
    let paths: Vec<&str> = errors.iter().filter_map(|e| e["path"].as_str()).collect();
    for path in ["lastName", "email", "phone", "company", "jobTitle"] {
        assert!(paths.contains(&path), "missing {}", path);
    }

    let email = errors.iter().find(|e| e["path"] == "email").unwrap();
    assert_eq!(email["type"], "field");
    assert_eq!(email["value"], "nope");
    assert_eq!(email["location"], "body");
    assert_eq!(email["msg"], "Email must be a valid email address");

    let phone = errors.iter().find(|e| e["path"] == "phone").unwrap();
    assert!(phone.get("value").is_none());
    assert_eq!(phone["msg"], "Phone is required");
}

#[tokio::test]
async fn test_create_malformed_json() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/contacts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"firstName\": "))
        .unwrap();

    let (status, body) = send_request(&app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body.");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_list_shape_and_pagination() {
    let app = app();
    for i in 0..12 {
        create(
            &app,
            &format!("First{:02}", i),
            &format!("Last{:02}", i),
            &format!("p{}@example.com", i),
        )
        .await;
    }

    let (status, body) = send(&app, Method::GET, "/contacts?page=2&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["totalContacts"], 12);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["currentPage"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["lastName"], "Last10");
}

#[tokio::test]
async fn test_list_sorted_descending() {
    let app = app();
    create(&app, "Ada", "Lovelace", "b@example.com").await;
    create(&app, "Alan", "Turing", "c@example.com").await;
    create(&app, "Grace", "Hopper", "a@example.com").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/contacts?sortField=email&sortOrder=-1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let emails: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["email"].as_str())
        .collect();
    assert_eq!(emails, ["c@example.com", "b@example.com", "a@example.com"]);
}

#[tokio::test]
async fn test_list_rejects_invalid_params() {
    let (status, body) = send(
        &app(),
        Method::GET,
        "/contacts?sortField=birthday&sortOrder=2&page=0&limit=abc",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["message"].as_array().unwrap();
    assert_eq!(errors.len(), 4);

    let sort_field = errors.iter().find(|e| e["path"] == "sortField").unwrap();
    assert_eq!(sort_field["msg"], "Invalid sort field: birthday");
    assert_eq!(sort_field["location"], "query");

    let sort_order = errors.iter().find(|e| e["path"] == "sortOrder").unwrap();
    assert_eq!(sort_order["msg"], "Invalid sort order value.");
}

#[tokio::test]
async fn test_get_update_delete_flow() {
    let app = app();
    let created = create(&app, "Ada", "Lovelace", "ada@example.com").await;
    let id = created["_id"].as_str().unwrap().to_string();
    let path = format!("/contacts/{}", id);

    let (status, body) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(
        &app,
        Method::PUT,
        &path,
        Some(json!({ "company": "Analytical Engines" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company"], "Analytical Engines");
    assert_eq!(body["firstName"], "Ada");

    let (status, body) = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Contact deleted successfully" }));

    let (status, body) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Contact not found" }));
}

#[tokio::test]
async fn test_unknown_id_is_404_for_every_verb() {
    let app = app();

    let (status, _) = send(&app, Method::GET, "/contacts/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/contacts/unknown",
        Some(json!({ "company": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/contacts/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_bad_email() {
    let app = app();
    let created = create(&app, "Ada", "Lovelace", "ada@example.com").await;
    let path = format!("/contacts/{}", created["_id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PUT, &path, Some(json!({ "email": "x@" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"][0]["path"], "email");

    let (_, body) = send(&app, Method::GET, &path, None).await;
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn test_numeric_field_values_are_accepted() {
    let app = app();
    let mut contact = contact_json("Ada", "Lovelace", "ada@example.com");
    contact["phone"] = json!(5550100);

    let (status, body) = send(&app, Method::POST, "/contacts", Some(contact)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["phone"], "5550100");
}

#[tokio::test]
async fn test_store_failure_is_500_with_operation_message() {
    let repo = MockContactRepository::new();
    let app = app_with(Arc::new(repo.clone()));
    repo.fail_with("connection refused");

    let (status, body) = send(&app, Method::GET, "/contacts", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch contacts.");
    assert_eq!(body["error"], "connection refused");

    let (status, body) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(contact_json("Ada", "Lovelace", "ada@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to create contact.");

    let (status, body) = send(&app, Method::DELETE, "/contacts/some-id", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to delete contact.");
}
