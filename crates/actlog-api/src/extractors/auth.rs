//! `AuthUser` extractor: reads the caller identity forwarded by the upstream
//! identity provider and injects a [`RequestContext`].

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use actlog_core::config::AuthConfig;
use actlog_core::error::AppError;
use actlog_core::result::AppResult;
use actlog_entity::user::UserRole;
use actlog_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted caller context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Build the caller context from the configured identity headers.
///
/// A missing user header or an unrecognised role is an authentication
/// error. A missing role header means an ordinary user.
pub fn resolve_caller(headers: &HeaderMap, config: &AuthConfig) -> AppResult<RequestContext> {
    let username = header(headers, &config.user_header)
        .ok_or_else(|| AppError::authentication("Missing caller identity"))?;

    let role = match header(headers, &config.role_header) {
        Some(raw) => raw
            .parse::<UserRole>()
            .map_err(|_| AppError::authentication(format!("Unrecognised role '{raw}'")))?,
        None => UserRole::User,
    };

    let ip_address = header(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .unwrap_or("unknown");

    let user_agent = header(headers, "user-agent").map(String::from);

    Ok(RequestContext::new(username, role, ip_address, user_agent))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = resolve_caller(&parts.headers, &state.config.auth)?;
        Ok(AuthUser(ctx))
    }
}
