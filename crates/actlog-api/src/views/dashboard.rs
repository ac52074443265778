//! Admin dashboard.

use actlog_service::context::RequestContext;

use super::{content_box, escape_html, layout};

/// Render the dashboard for `caller`.
///
/// Only administrators get the `admin` box linking to the activity log.
pub fn dashboard_page(caller: &RequestContext, total_entries: Option<u64>) -> String {
    let mut body = content_box(
        "Dashboard",
        &format!(
            "<p>Welcome back, {}.</p>",
            escape_html(&caller.username)
        ),
    );

    if caller.is_admin() {
        let count = total_entries
            .map(|n| format!("<p class=\"entry-count\">{n} recorded entries</p>\n"))
            .unwrap_or_default();
        body.push_str(&content_box(
            "admin",
            &format!(
                "{count}<ul class=\"admin-links\">\n\
                 <li><a href=\"/admin/app/userlog/list\">User log</a></li>\n\
                 </ul>"
            ),
        ));
    }

    layout("Dashboard", Some(caller), &body)
}
