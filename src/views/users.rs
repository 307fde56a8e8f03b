use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "users.html")]
struct UsersTemplate {
    company: String,
    users: Vec<UserRow>,
}

struct UserRow {
    id: i64,
    username: String,
    role: String,
    created_at: String,
}

/// Owner-only user management page.
pub async fn index(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    auth.require_owner()?;

    let pool = state.tenants.resolve(&auth.company).await?;

    let users = db::users::list(&pool)
        .await?
        .into_iter()
        .map(|u| UserRow {
            id: u.id,
            username: u.username,
            role: u.role,
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    let template = UsersTemplate {
        company: auth.company.clone(),
        users,
    };
    Ok(Html(template.render().unwrap_or_default()))
}
