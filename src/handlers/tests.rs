//! # Tests for Handlers
//!
//! This module contains router-level tests for the page and health handlers,
//! backed by an in-memory SQLite database.

use std::sync::Arc;

use crate::db::run_migrations;
use crate::handlers::{KEYWORD_KEY, LIST_CUSTOMER_KEY, customer_list_view};
use crate::models::{NewCustomer, customer};
use crate::repositories::{CustomerRepository, CustomerStore};
use crate::server::{AppState, create_app};
use crate::telemetry::TRACE_ID_HEADER;
use crate::views::INDEX_VIEW;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::{Database, DatabaseConnection};
use tower::ServiceExt;

async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    run_migrations(&db).await.unwrap();
    db
}

async fn seed(db: &DatabaseConnection, rows: &[(&str, &str, &str)]) {
    let repo = CustomerRepository::new(Arc::new(db.clone()));
    for (name, email, address) in rows {
        repo.create(NewCustomer::new(*name, *email, *address))
            .await
            .unwrap();
    }
}

async fn test_app(db: DatabaseConnection) -> Router {
    create_app(AppState::new(db).expect("templates load"))
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[test]
fn customer_list_view_uses_index_and_list_key() {
    let customers = vec![customer::Model {
        id: 1,
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
        address: "NY".to_string(),
    }];

    let mav = customer_list_view(&customers);

    assert_eq!(mav.view_name(), INDEX_VIEW);
    let listed = mav.model().get(LIST_CUSTOMER_KEY).expect("list is in context");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["name"], "Alice");
    assert!(mav.model().get(KEYWORD_KEY).is_none());
}

#[tokio::test]
async fn home_renders_every_customer() {
    let db = setup_db().await;
    seed(
        &db,
        &[
            ("Alice", "a@x.com", "NY"),
            ("Bob", "bob@example.org", "Paris"),
        ],
    )
    .await;

    let app = test_app(db).await;
    let (status, html) = get_body(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<td>Alice</td>"));
    assert!(html.contains("<td>Bob</td>"));
    assert!(html.contains("<td>bob@example.org</td>"));
}

#[tokio::test]
async fn home_returns_html_content_type() {
    let app = test_app(setup_db().await).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn home_with_no_customers_shows_empty_state() {
    let app = test_app(setup_db().await).await;

    let (status, html) = get_body(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No customers found"));
}

#[tokio::test]
async fn search_renders_only_matches() {
    let db = setup_db().await;
    seed(
        &db,
        &[
            ("Alice", "a@x.com", "NY"),
            ("Bob", "bob@example.org", "Paris"),
        ],
    )
    .await;

    let app = test_app(db).await;
    let (status, html) = get_body(app, "/search?keyword=Paris").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<td>Bob</td>"));
    assert!(!html.contains("<td>Alice</td>"));
    assert!(html.contains(r#"value="Paris""#));
}

#[tokio::test]
async fn search_without_keyword_lists_everyone() {
    let db = setup_db().await;
    seed(&db, &[("Alice", "a@x.com", "NY"), ("Bob", "b@y.org", "LA")]).await;

    let app = test_app(db).await;
    let (status, html) = get_body(app, "/search").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<td>Alice</td>"));
    assert!(html.contains("<td>Bob</td>"));
}

#[tokio::test]
async fn home_fails_with_server_error_when_table_is_missing() {
    // No migrations: the customer query itself fails.
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let app = test_app(db).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = test_app(setup_db().await).await;

    let (status, body) = get_body(app, "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn responses_echo_incoming_trace_id() {
    let app = test_app(setup_db().await).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(TRACE_ID_HEADER, "trace-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(TRACE_ID_HEADER).unwrap(),
        "trace-abc"
    );
}

#[tokio::test]
async fn responses_get_generated_trace_id() {
    let app = test_app(setup_db().await).await;

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let trace_id = response.headers().get(TRACE_ID_HEADER).unwrap();
    assert!(uuid::Uuid::parse_str(trace_id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = test_app(setup_db().await).await;

    let (status, body) = get_body(app, "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"].get("/").is_some());
    assert!(doc["paths"].get("/search").is_some());
    assert!(doc["paths"].get("/healthz").is_some());
}
