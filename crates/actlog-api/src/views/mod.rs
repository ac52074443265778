//! Server-rendered admin pages.
//!
//! Markup is built with `format!` and `push_str`; every piece of stored or
//! caller-supplied text goes through [`escape_html`] first.

pub mod dashboard;
pub mod user_log;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use actlog_auth::DenyReason;
use actlog_service::context::RequestContext;

/// Visible text of every denial page and body.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Percent-encode a query string value.
pub fn encode_query(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// Wrap `body` in the admin layout.
pub fn layout(title: &str, caller: Option<&RequestContext>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{} | Songbird Admin</title>\n",
        escape_html(title)
    ));
    html.push_str("</head>\n<body class=\"skin-blue\">\n");
    html.push_str("<header class=\"main-header\">\n");
    html.push_str("<a class=\"logo\" href=\"/admin/dashboard\">Songbird</a>\n");
    if let Some(ctx) = caller {
        html.push_str(&format!(
            "<span class=\"user-menu\">{}</span>\n",
            escape_html(&ctx.username)
        ));
    }
    html.push_str("</header>\n<section class=\"content\">\n");
    html.push_str(body);
    html.push_str("\n</section>\n</body>\n</html>\n");
    html
}

/// A titled content box.
pub fn content_box(title: &str, inner: &str) -> String {
    format!(
        "<div class=\"box\">\n<div class=\"box-header\"><h3 class=\"box-title\">{}</h3></div>\n\
         <div class=\"box-body\">\n{}\n</div>\n</div>\n",
        escape_html(title),
        inner
    )
}

/// The page shown when the access gate refuses an admin request.
pub fn access_denied_page(reason: DenyReason) -> Response {
    let body = format!(
        "<div class=\"error-page\">\n<h2 class=\"headline\">403</h2>\n\
         <h3>{ACCESS_DENIED}</h3>\n<p class=\"reason\" data-reason=\"{}\">\
         You are not allowed to view this page.</p>\n</div>",
        reason.code()
    );
    (
        StatusCode::FORBIDDEN,
        Html(layout(ACCESS_DENIED, None, &body)),
    )
        .into_response()
}

/// A generic error page. `message` must already be safe to show the client.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<div class=\"error-page\">\n<h2 class=\"headline\">{}</h2>\n<h3>{}</h3>\n<p>{}</p>\n</div>",
        status.as_u16(),
        escape_html(title),
        escape_html(message)
    );
    (status, Html(layout(title, None, &body))).into_response()
}
