use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    company: String,
    username: String,
    is_owner: bool,
    records: Vec<RecordRow>,
}

struct RecordRow {
    id: i64,
    owner: String,
    entry_date: String,
    driver_name: String,
    entry_phone: String,
    exit_date: String,
    exit_driver_name: String,
    exit_phone: String,
    container_type: String,
    container_no: String,
    created_by_user: String,
}

fn dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub async fn index(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let pool = state.tenants.resolve(&auth.company).await?;

    let records = db::containers::list_with_creator(&pool)
        .await?
        .into_iter()
        .map(|r| RecordRow {
            id: r.id,
            owner: dash(r.owner),
            entry_date: dash(r.entry_date),
            driver_name: dash(r.driver_name),
            entry_phone: dash(r.entry_phone),
            exit_date: dash(r.exit_date),
            exit_driver_name: dash(r.exit_driver_name),
            exit_phone: dash(r.exit_phone),
            container_type: dash(r.container_type),
            container_no: dash(r.container_no),
            created_by_user: dash(r.created_by_user),
        })
        .collect();

    let template = IndexTemplate {
        company: auth.company.clone(),
        username: auth.username.clone(),
        is_owner: auth.is_owner(),
        records,
    };
    Ok(Html(template.render().unwrap_or_default()))
}
