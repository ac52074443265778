//! User log list, show, and edit pages.

use actlog_core::types::PageResponse;
use actlog_entity::user_log::{LogFilter, UserLog};
use actlog_service::context::RequestContext;

use super::{content_box, encode_query, escape_html, layout};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn optional(value: Option<&str>) -> String {
    value.map(escape_html).unwrap_or_default()
}

fn list_href(filter: &LogFilter, page: u64, page_size: u64) -> String {
    let mut href = format!("/admin/app/userlog/list?page={page}&per_page={page_size}");
    if let Some(username) = &filter.username {
        href.push_str(&format!("&username={}", encode_query(username)));
    }
    if let Some(action) = &filter.action {
        href.push_str(&format!("&action={}", encode_query(action)));
    }
    href
}

fn filter_form(filter: &LogFilter, page_size: u64) -> String {
    format!(
        "<form class=\"filters\" method=\"get\" action=\"/admin/app/userlog/list\">\n\
         <input type=\"hidden\" name=\"per_page\" value=\"{page_size}\">\n\
         <label>Username <input type=\"text\" name=\"username\" value=\"{}\"></label>\n\
         <label>Action <input type=\"text\" name=\"action\" value=\"{}\"></label>\n\
         <button type=\"submit\">Filter</button>\n</form>\n",
        optional(filter.username.as_deref()),
        optional(filter.action.as_deref()),
    )
}

/// Render one page of the log, most recent first.
pub fn list_page(
    caller: &RequestContext,
    page: &PageResponse<UserLog>,
    filter: &LogFilter,
) -> String {
    let mut inner = filter_form(filter, page.page_size);

    if page.items.is_empty() {
        inner.push_str("<p class=\"empty\">No entries.</p>\n");
    } else {
        inner.push_str(
            "<table class=\"table\">\n<thead><tr><th>Id</th><th>Username</th><th>Action</th>\
             <th>Current URL</th><th>Referrer</th><th>Created</th><th></th></tr></thead>\n<tbody>\n",
        );
        for entry in &page.items {
            let id = entry.id();
            inner.push_str(&format!(
                "<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><a href=\"/admin/app/userlog/{id}/show\">Show</a> \
                 <a href=\"/admin/app/userlog/{id}/edit\">Edit</a></td></tr>\n",
                escape_html(entry.username()),
                escape_html(entry.action()),
                escape_html(entry.current_url()),
                optional(entry.referrer()),
                entry.created().format(TIMESTAMP_FORMAT),
            ));
        }
        inner.push_str("</tbody>\n</table>\n");
    }

    inner.push_str(&format!(
        "<div class=\"pager\">\n<span class=\"total\">{} entries, page {} of {}</span>\n",
        page.total_items,
        page.page,
        page.total_pages.max(1)
    ));
    if page.has_previous {
        inner.push_str(&format!(
            "<a rel=\"prev\" href=\"{}\">Previous</a>\n",
            escape_html(&list_href(filter, page.page - 1, page.page_size))
        ));
    }
    if page.has_next {
        inner.push_str(&format!(
            "<a rel=\"next\" href=\"{}\">Next</a>\n",
            escape_html(&list_href(filter, page.page + 1, page.page_size))
        ));
    }
    inner.push_str("</div>");

    layout("User log", Some(caller), &content_box("User log", &inner))
}

fn detail_rows(entry: &UserLog) -> String {
    format!(
        "<dl class=\"dl-horizontal\">\n\
         <dt>Id</dt><dd>{}</dd>\n\
         <dt>Username</dt><dd>{}</dd>\n\
         <dt>Action</dt><dd>{}</dd>\n\
         <dt>Current URL</dt><dd>{}</dd>\n\
         <dt>Referrer</dt><dd>{}</dd>\n\
         <dt>Data</dt><dd><pre>{}</pre></dd>\n\
         <dt>Created</dt><dd>{}</dd>\n\
         </dl>",
        entry.id(),
        escape_html(entry.username()),
        escape_html(entry.action()),
        escape_html(entry.current_url()),
        optional(entry.referrer()),
        optional(entry.data()),
        entry.created().format(TIMESTAMP_FORMAT),
    )
}

/// Render a single entry.
pub fn show_page(caller: &RequestContext, entry: &UserLog) -> String {
    let id = entry.id();
    let inner = format!(
        "{}\n<p><a href=\"/admin/app/userlog/{id}/edit\">Edit</a> \
         <a href=\"/admin/app/userlog/list\">Back to list</a></p>",
        detail_rows(entry)
    );
    layout(
        &format!("User log {id}"),
        Some(caller),
        &content_box(&format!("User log {id}"), &inner),
    )
}

/// Render the edit form for a single entry.
///
/// Entries are immutable: every field is read-only and there is no submit.
pub fn edit_page(caller: &RequestContext, entry: &UserLog) -> String {
    let id = entry.id();
    let field = |label: &str, name: &str, value: &str| {
        format!(
            "<div class=\"form-group\"><label for=\"{name}\">{label}</label>\
             <input id=\"{name}\" name=\"{name}\" type=\"text\" value=\"{}\" readonly></div>\n",
            escape_html(value)
        )
    };

    let mut inner = String::from("<form class=\"user-log-edit\">\n");
    inner.push_str(&field("Username", "username", entry.username()));
    inner.push_str(&field("Action", "action", entry.action()));
    inner.push_str(&field("Current URL", "current_url", entry.current_url()));
    inner.push_str(&field("Referrer", "referrer", entry.referrer().unwrap_or_default()));
    inner.push_str(&format!(
        "<div class=\"form-group\"><label for=\"data\">Data</label>\
         <textarea id=\"data\" name=\"data\" readonly>{}</textarea></div>\n",
        optional(entry.data())
    ));
    inner.push_str(&field(
        "Created",
        "created",
        &entry.created().format(TIMESTAMP_FORMAT).to_string(),
    ));
    inner.push_str("</form>\n<p class=\"help-block\">Log entries cannot be modified.</p>\n");
    inner.push_str(&format!(
        "<p><a href=\"/admin/app/userlog/{id}/show\">Show</a> \
         <a href=\"/admin/app/userlog/list\">Back to list</a></p>"
    ));

    layout(
        &format!("Edit user log {id}"),
        Some(caller),
        &content_box(&format!("Edit user log {id}"), &inner),
    )
}
