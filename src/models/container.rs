use serde::Serialize;

/// One yard entry/exit record. The exit-leg columns stay NULL until the
/// container leaves, so every field besides the id is optional.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Container {
    pub id: i64,
    pub owner: Option<String>,
    pub entry_date: Option<String>,
    pub driver_name: Option<String>,
    pub entry_phone: Option<String>,
    pub exit_date: Option<String>,
    pub exit_driver_name: Option<String>,
    pub exit_phone: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub container_type: Option<String>,
    pub container_no: Option<String>,
    pub created_by: Option<i64>,
}

/// Listing row: record joined with the creator's username. The creator is
/// optional so records outlive their author's account.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ContainerWithCreator {
    pub id: i64,
    pub owner: Option<String>,
    pub entry_date: Option<String>,
    pub driver_name: Option<String>,
    pub entry_phone: Option<String>,
    pub exit_date: Option<String>,
    pub exit_driver_name: Option<String>,
    pub exit_phone: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub container_type: Option<String>,
    pub container_no: Option<String>,
    pub created_by: Option<i64>,
    pub created_by_user: Option<String>,
}

/// Insert payload; `None` fields are stored as NULL.
#[derive(Debug, Clone, Default)]
pub struct NewContainer {
    pub owner: Option<String>,
    pub entry_date: Option<String>,
    pub driver_name: Option<String>,
    pub entry_phone: Option<String>,
    pub exit_date: Option<String>,
    pub exit_driver_name: Option<String>,
    pub exit_phone: Option<String>,
    pub container_type: Option<String>,
    pub container_no: Option<String>,
}
