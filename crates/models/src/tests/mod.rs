//! Store-level tests against a migrated in-memory SQLite database.

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::db::connect_and_migrate;

pub mod crud_tests;
pub mod db_tests;
pub mod singleton_tests;

pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}
