use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::session;
use crate::error::AppError;
use crate::models::user::ROLE_OWNER;
use crate::state::SharedState;

pub const SESSION_COOKIE: &str = "session";

/// Authenticated request context, decoded from the session cookie.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub company: String,
    pub username: String,
    pub role: String,
}

impl AuthUser {
    pub fn require_owner(&self) -> Result<(), AppError> {
        if self.role == ROLE_OWNER {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "user {} is not the company owner",
                self.username
            )))
        }
    }

    pub fn is_owner(&self) -> bool {
        self.role == ROLE_OWNER
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(SESSION_COOKIE) {
            let claims = session::decode_token(cookie.value(), &state.config.jwt_secret)
                .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;

            return Ok(AuthUser {
                user_id: claims.sub,
                company: claims.ten,
                username: claims.name,
                role: claims.role,
            });
        }

        Err(AppError::Unauthorized("Missing session".to_string()))
    }
}
