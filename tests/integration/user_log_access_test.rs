//! Admin pages: only administrators may list, show, or edit log entries.

use axum::http::StatusCode;

use actlog_entity::user_log::NewUserLog;

use crate::helpers::{Caller, TestApp};

const SECRET: &str = "card-ending-4242";

async fn seeded_app() -> TestApp {
    let app = TestApp::new();
    app.seed(
        NewUserLog::new("test1", "/admin/dashboard", "login_attempt")
            .with_referrer("/login")
            .with_data(SECRET),
    )
    .await;
    app.seed(NewUserLog::new("test2", "/admin/profile", "page_view"))
        .await;
    app.seed(NewUserLog::new("test1", "/admin/app/user/list", "page_view"))
        .await;
    app
}

#[tokio::test]
async fn test_user_is_denied_every_log_page() {
    let app = seeded_app().await;

    for path in [
        "/admin/app/userlog/list",
        "/admin/app/userlog/1/show",
        "/admin/app/userlog/1/edit",
        "/admin/app/userlog/3/show",
        "/admin/app/userlog/3/edit",
    ] {
        let response = app.request("GET", path, None, Caller::User("test1")).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        assert!(response.text.contains("Access Denied"), "{path}");
        assert!(!response.text.contains(SECRET), "{path} leaked entry data");
        assert!(!response.text.contains("login_attempt"), "{path} leaked entry data");
    }
}

#[tokio::test]
async fn test_user_is_denied_for_ids_that_do_not_exist() {
    let app = seeded_app().await;

    for path in [
        "/admin/app/userlog/999/show",
        "/admin/app/userlog/abc/edit",
    ] {
        let response = app.request("GET", path, None, Caller::User("test1")).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        assert!(response.text.contains("Access Denied"), "{path}");
    }
}

#[tokio::test]
async fn test_user_is_denied_for_malformed_list_queries() {
    let app = seeded_app().await;

    for path in [
        "/admin/app/userlog/list?page=abc",
        "/admin/app/userlog/list?per_page=-1",
    ] {
        let response = app.request("GET", path, None, Caller::User("test1")).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        assert!(response.text.contains("Access Denied"), "{path}");
    }

    let admin = app
        .request(
            "GET",
            "/admin/app/userlog/list?page=abc",
            None,
            Caller::Admin("admin"),
        )
        .await;
    assert_eq!(admin.status, StatusCode::BAD_REQUEST);
    assert!(!admin.text.contains("Access Denied"));
}

#[tokio::test]
async fn test_admin_list_past_the_last_page_is_empty() {
    let app = seeded_app().await;

    let response = app
        .request(
            "GET",
            "/admin/app/userlog/list?page=18446744073709551615&per_page=100",
            None,
            Caller::Admin("admin"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("No entries."));
    assert!(response.text.contains("rel=\"prev\""));
}

#[tokio::test]
async fn test_admin_sees_entry_data() {
    let app = seeded_app().await;

    let list = app
        .request("GET", "/admin/app/userlog/list", None, Caller::Admin("admin"))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.text.contains("login_attempt"));
    assert!(list.text.contains("/admin/profile"));
    assert!(!list.text.contains("Access Denied"));

    let show = app
        .request("GET", "/admin/app/userlog/1/show", None, Caller::Admin("admin"))
        .await;
    assert_eq!(show.status, StatusCode::OK);
    assert!(show.text.contains(SECRET));
    assert!(show.text.contains("/login"));

    let edit = app
        .request("GET", "/admin/app/userlog/1/edit", None, Caller::Admin("admin"))
        .await;
    assert_eq!(edit.status, StatusCode::OK);
    assert!(edit.text.contains(SECRET));
    assert!(edit.text.contains("readonly"));
}

#[tokio::test]
async fn test_admin_list_is_newest_first_and_filterable() {
    let app = seeded_app().await;

    let list = app
        .request(
            "GET",
            "/admin/app/userlog/list?username=test1&action=",
            None,
            Caller::Admin("admin"),
        )
        .await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(!list.text.contains("/admin/profile"));

    let newer = list
        .text
        .find("/admin/app/user/list")
        .expect("newest entry listed");
    let older = list
        .text
        .find("login_attempt")
        .expect("oldest entry listed");
    assert!(newer < older);
}

#[tokio::test]
async fn test_admin_unknown_id_is_not_found() {
    let app = seeded_app().await;

    for path in ["/admin/app/userlog/999/show", "/admin/app/userlog/abc/edit"] {
        let response = app.request("GET", path, None, Caller::Admin("admin")).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(!response.text.contains("Access Denied"), "{path}");
    }
}

#[tokio::test]
async fn test_user_dashboard_has_no_admin_box() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/admin/dashboard", None, Caller::User("test1"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let titles = response.box_titles();
    assert!(!titles.is_empty());
    assert!(titles.iter().all(|t| !t.contains("admin")), "{titles:?}");
}

#[tokio::test]
async fn test_admin_dashboard_has_admin_box() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/admin/dashboard", None, Caller::Admin("admin"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.box_titles().contains(&"admin"));
    assert!(response.text.contains("/admin/app/userlog/list"));
}

#[tokio::test]
async fn test_anonymous_caller_is_unauthorized() {
    let app = seeded_app().await;

    let response = app
        .request("GET", "/admin/app/userlog/list", None, Caller::Anonymous)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.text.contains(SECRET));
}

#[tokio::test]
async fn test_page_views_are_recorded_for_denied_and_allowed_requests() {
    let app = TestApp::new();

    let response = app
        .request_with_headers(
            "GET",
            "/admin/app/userlog/list?page=2",
            None,
            Caller::User("test1"),
            &[("referer", "/admin/dashboard")],
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    app.request("GET", "/admin/dashboard", None, Caller::Admin("admin"))
        .await;

    let entries = app.entries().await;
    assert_eq!(entries.len(), 2);

    let denied = &entries[1];
    assert_eq!(denied.username(), "test1");
    assert_eq!(denied.action(), "page_view");
    assert_eq!(denied.current_url(), "/admin/app/userlog/list?page=2");
    assert_eq!(denied.referrer(), Some("/admin/dashboard"));
    let data: serde_json::Value = serde_json::from_str(denied.data().unwrap()).unwrap();
    assert_eq!(data["method"], "GET");
    assert_eq!(data["status"], 403);

    let allowed = &entries[0];
    assert_eq!(allowed.username(), "admin");
    assert_eq!(allowed.referrer(), None);
}

#[tokio::test]
async fn test_anonymous_and_disabled_tracking_record_nothing() {
    let app = TestApp::new();
    app.request("GET", "/admin/dashboard", None, Caller::Anonymous)
        .await;
    assert!(app.entries().await.is_empty());

    let mut config = actlog_core::config::AppConfig::default();
    config.activity.track_page_views = false;
    let app = TestApp::with_config(config);
    app.request("GET", "/admin/dashboard", None, Caller::User("test1"))
        .await;
    assert!(app.entries().await.is_empty());
}
