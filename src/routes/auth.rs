use axum::extract::{Form, State};
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::auth::extractor::SESSION_COOKIE;
use crate::auth::password;
use crate::auth::session::{encode_token, Claims};
use crate::db;
use crate::error::AppError;
use crate::models::user::ROLE_OWNER;
use crate::models::User;
use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RegisterForm {
    pub company: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginForm {
    pub company: String,
    pub username: String,
    pub password: String,
}

fn session_cookie(token: &str, ttl_minutes: i64) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::minutes(ttl_minutes))
        .build();

    CookieJar::new().add(cookie)
}

fn clear_session_cookie() -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(cookie)
}

fn issue_session(
    state: &SharedState,
    company: &str,
    user: &User,
) -> Result<CookieJar, AppError> {
    let claims = Claims::new(
        user.id,
        company.to_string(),
        user.username.clone(),
        user.role.clone(),
        state.config.session_ttl_minutes,
    );
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;
    Ok(session_cookie(&token, state.config.session_ttl_minutes))
}

/// First registration for a company claims its sole owner slot. The
/// existing-owner read gives the common case a friendly failure; the
/// `users_single_owner` unique index decides concurrent races atomically.
pub async fn register(
    State(state): State<SharedState>,
    Form(form): Form<RegisterForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    if form.username.is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    let pool = state.tenants.resolve(&form.company).await?;

    if db::users::find_owner(&pool).await?.is_some() {
        return Err(AppError::OwnerExists);
    }

    let password_hash = password::hash(&form.password).await.map_err(AppError::Internal)?;

    let user = db::users::create(&pool, &form.username, &password_hash, ROLE_OWNER)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::OwnerExists
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(company = %form.company, user = %user.username, "company owner registered");

    let jar = issue_session(&state, &form.company, &user)?;
    Ok((jar, Redirect::to("/")))
}

pub async fn login(
    State(state): State<SharedState>,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    if state.login_limiter.check(&form.company, &form.username).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts".to_string(),
        ));
    }

    let pool = state.tenants.resolve(&form.company).await?;

    let user = db::users::find_by_username(&pool, &form.username)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let valid = password::verify(&form.password, &user.password_hash)
        .await
        .map_err(AppError::Internal)?;

    if !valid {
        state.login_limiter.record_failure(&form.company, &form.username);
        return Err(AppError::InvalidCredentials);
    }

    tracing::debug!(company = %form.company, user = %user.username, "login");

    let jar = issue_session(&state, &form.company, &user)?;
    Ok((jar, Redirect::to("/")))
}

pub async fn logout() -> (CookieJar, Redirect) {
    (clear_session_cookie(), Redirect::to("/login"))
}
