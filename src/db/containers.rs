use sqlx::SqlitePool;

use crate::models::{Container, ContainerWithCreator, NewContainer};

pub async fn create(
    pool: &SqlitePool,
    record: &NewContainer,
    created_by: i64,
) -> Result<Container, sqlx::Error> {
    sqlx::query_as::<_, Container>(
        "INSERT INTO containers (
            owner, entry_date, driver_name, entry_phone,
            exit_date, exit_driver_name, exit_phone,
            type, container_no, created_by
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
    )
    .bind(&record.owner)
    .bind(&record.entry_date)
    .bind(&record.driver_name)
    .bind(&record.entry_phone)
    .bind(&record.exit_date)
    .bind(&record.exit_driver_name)
    .bind(&record.exit_phone)
    .bind(&record.container_type)
    .bind(&record.container_no)
    .bind(created_by)
    .fetch_one(pool)
    .await
}

/// Every record in the store paired with its creator's username. LEFT JOIN:
/// a record whose creator no longer exists still lists, with no creator.
pub async fn list_with_creator(
    pool: &SqlitePool,
) -> Result<Vec<ContainerWithCreator>, sqlx::Error> {
    sqlx::query_as::<_, ContainerWithCreator>(
        "SELECT c.*, u.username AS created_by_user
         FROM containers c
         LEFT JOIN users u ON c.created_by = u.id
         ORDER BY c.id",
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Container>, sqlx::Error> {
    sqlx::query_as::<_, Container>("SELECT * FROM containers WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}
