use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::user::ROLE_USER;
use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AddUserForm {
    pub username: String,
    pub password: String,
}

/// Owner-only: add a regular user to the owner's own company store.
pub async fn add(
    auth: AuthUser,
    State(state): State<SharedState>,
    Form(form): Form<AddUserForm>,
) -> Result<Redirect, AppError> {
    auth.require_owner()?;

    let pool = state.tenants.resolve(&auth.company).await?;

    let password_hash = password::hash(&form.password).await.map_err(AppError::Internal)?;

    db::users::create(&pool, &form.username, &password_hash, ROLE_USER)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateUsername
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(company = %auth.company, user = %form.username, "user added");

    Ok(Redirect::to("/users"))
}
