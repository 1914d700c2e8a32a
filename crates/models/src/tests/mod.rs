/// Database connection and migration tests
pub mod db_tests;

/// CRUD operations tests for posts and comments
pub mod crud_tests;

use sea_orm::DatabaseConnection;

/// In-memory database with migrations applied; one per test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_in_memory().await
}
