//! JSON API: recording, gated reads, and export.

use axum::http::StatusCode;
use serde_json::json;

use actlog_entity::user_log::NewUserLog;

use crate::helpers::{Caller, TestApp};

#[tokio::test]
async fn test_health_reports_store() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/health", None, Caller::Anonymous)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], true);
}

#[tokio::test]
async fn test_any_caller_can_record_but_only_admin_can_read() {
    let app = TestApp::new();

    let recorded = app
        .request(
            "POST",
            "/api/logs",
            Some(json!({
                "current_url": "/admin/dashboard",
                "action": "login_attempt",
                "referrer": "/login",
                "data": {"ok": true}
            })),
            Caller::User("test1"),
        )
        .await;
    assert_eq!(recorded.status, StatusCode::CREATED);
    assert_eq!(recorded.body["success"], true);
    let id = recorded.body["data"]["id"].as_i64().expect("id assigned");
    assert_eq!(id, 1);

    let path = format!("/api/admin/logs/{id}");
    let denied = app.request("GET", &path, None, Caller::User("test1")).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.body["error"], "ACCESS_DENIED");
    assert_eq!(denied.body["reason"], "NOT_ADMIN");
    assert_eq!(denied.body["message"], "Access Denied");

    let shown = app.request("GET", &path, None, Caller::Admin("admin")).await;
    assert_eq!(shown.status, StatusCode::OK);
    assert_eq!(shown.body["data"]["username"], "test1");
    assert_eq!(shown.body["data"]["referrer"], "/login");
    assert_eq!(shown.body["data"]["data"], r#"{"ok":true}"#);
}

#[tokio::test]
async fn test_invalid_record_is_rejected_and_not_stored() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/logs",
            Some(json!({
                "current_url": "/admin/dashboard",
                "action": "x".repeat(256),
            })),
            Caller::User("test1"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(app.entries().await.is_empty());

    let anonymous = app
        .request(
            "POST",
            "/api/logs",
            Some(json!({"current_url": "/", "action": "page_view"})),
            Caller::Anonymous,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert!(app.entries().await.is_empty());
}

#[tokio::test]
async fn test_list_paginates_for_admin_and_denies_user() {
    let app = TestApp::new();
    for i in 0..5 {
        app.seed(NewUserLog::new("test1", format!("/page/{i}"), "page_view"))
            .await;
    }

    let page = app
        .request(
            "GET",
            "/api/admin/logs?page=2&per_page=2",
            None,
            Caller::Admin("admin"),
        )
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["data"]["total_items"], 5);
    assert_eq!(page.body["data"]["items"][0]["current_url"], "/page/2");
    assert_eq!(page.body["data"]["has_next"], true);

    let denied = app
        .request("GET", "/api/admin/logs", None, Caller::User("test1"))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.body["reason"], "NOT_ADMIN");
}

#[tokio::test]
async fn test_export_streams_ndjson_newest_first() {
    let app = TestApp::new();
    for url in ["/a", "/b", "/c"] {
        app.seed(NewUserLog::new("test1", url, "page_view")).await;
    }
    app.seed(NewUserLog::new("test2", "/d", "login_attempt"))
        .await;

    let export = app
        .request(
            "GET",
            "/api/admin/logs/export?action=page_view",
            None,
            Caller::Admin("admin"),
        )
        .await;
    assert_eq!(export.status, StatusCode::OK);
    assert_eq!(export.content_type, "application/x-ndjson");

    let urls: Vec<String> = export
        .text
        .lines()
        .map(|line| {
            let entry: serde_json::Value = serde_json::from_str(line).unwrap();
            entry["current_url"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(urls, ["/c", "/b", "/a"]);

    let denied = app
        .request("GET", "/api/admin/logs/export", None, Caller::User("test1"))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert!(!denied.text.contains("/a"));
}

#[tokio::test]
async fn test_malformed_query_is_gated_before_it_is_rejected() {
    let app = TestApp::new();
    app.seed(NewUserLog::new("test1", "/a", "page_view")).await;

    for path in ["/api/admin/logs?page=abc", "/api/admin/logs/export?page=abc"] {
        let denied = app.request("GET", path, None, Caller::User("test1")).await;
        assert_eq!(denied.status, StatusCode::FORBIDDEN, "{path}");
        assert_eq!(denied.body["reason"], "NOT_ADMIN", "{path}");

        let rejected = app.request("GET", path, None, Caller::Admin("admin")).await;
        assert_eq!(rejected.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(rejected.body["error"], "VALIDATION_ERROR", "{path}");
    }
}

#[tokio::test]
async fn test_huge_page_number_is_clamped() {
    let app = TestApp::new();
    app.seed(NewUserLog::new("test1", "/a", "page_view")).await;

    let page = app
        .request(
            "GET",
            "/api/admin/logs?page=18446744073709551615",
            None,
            Caller::Admin("admin"),
        )
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["data"]["total_items"], 1);
    assert_eq!(page.body["data"]["items"].as_array().map(Vec::len), Some(0));
    assert_eq!(page.body["data"]["has_next"], false);
}
