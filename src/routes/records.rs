use axum::extract::{Form, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::invoice;
use crate::models::NewContainer;
use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AddRecordForm {
    pub owner: String,
    pub entry_date: String,
    pub entry_driver_name: String,
    pub entry_phone: String,
    pub exit_date: String,
    pub exit_driver_name: String,
    pub exit_phone: String,
    #[serde(rename = "type")]
    pub container_type: String,
    pub container_no: String,
}

fn blank_to_none(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl From<AddRecordForm> for NewContainer {
    fn from(form: AddRecordForm) -> Self {
        NewContainer {
            owner: blank_to_none(form.owner),
            entry_date: blank_to_none(form.entry_date),
            driver_name: blank_to_none(form.entry_driver_name),
            entry_phone: blank_to_none(form.entry_phone),
            exit_date: blank_to_none(form.exit_date),
            exit_driver_name: blank_to_none(form.exit_driver_name),
            exit_phone: blank_to_none(form.exit_phone),
            container_type: blank_to_none(form.container_type),
            container_no: blank_to_none(form.container_no),
        }
    }
}

/// Insert an entry/exit record, attributed to the session user.
pub async fn add(
    auth: AuthUser,
    State(state): State<SharedState>,
    Form(form): Form<AddRecordForm>,
) -> Result<Redirect, AppError> {
    let pool = state.tenants.resolve(&auth.company).await?;

    let record = db::containers::create(&pool, &NewContainer::from(form), auth.user_id).await?;

    tracing::debug!(company = %auth.company, id = record.id, "record added");

    Ok(Redirect::to("/"))
}

/// Render one record as a PDF invoice and stream it as an attachment.
pub async fn invoice(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let pool = state.tenants.resolve(&auth.company).await?;

    let record = db::containers::find_by_id(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("record {id}")))?;

    let font = state
        .invoice_font
        .as_ref()
        .ok_or_else(|| AppError::Render("invoice font not loaded".to_string()))?;

    let pdf = invoice::render(&auth.company, &record, font).map_err(AppError::Render)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=factor-{id}.pdf"),
            ),
        ],
        pdf,
    )
        .into_response())
}
