#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh in-memory database per test; nothing is shared between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}
