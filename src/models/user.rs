use chrono::NaiveDateTime;
use serde::Serialize;

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

/// Listing row for the user management page — no credential material.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}
