use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use super::setup_test_db;
use crate::db::connect_with_config;

#[tokio::test]
async fn test_in_memory_connection() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    let row = db
        .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string()))
        .await?
        .expect("one row");
    let value: i32 = row.try_get("", "test")?;
    assert_eq!(value, 1);
    Ok(())
}

#[tokio::test]
async fn test_migrations_create_every_table() -> Result<()> {
    let db = setup_test_db().await?;
    for table in [
        "category",
        "client",
        "contact_info",
        "contact_message",
        "hardware_feature",
        "device",
        "distributor_info",
        "office_address",
        "hero_section",
        "why_choose_feature",
        "app_feature",
        "stat",
        "testimonial",
        "certification",
        "award",
        "module",
    ] {
        let row = db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = ?",
                [table.into()],
            ))
            .await?
            .expect("count row");
        let n: i32 = row.try_get("", "n")?;
        assert_eq!(n, 1, "missing table {table}");
    }
    Ok(())
}

#[tokio::test]
async fn test_singleton_check_constraint() -> Result<()> {
    let db = setup_test_db().await?;
    let res = db
        .execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "INSERT INTO distributor_info (id, heading, description, button_text, button_link, is_active, updated_at) \
             VALUES (2, 'h', '', 'b', '/', 1, '2024-01-01T00:00:00+00:00')"
                .to_string(),
        ))
        .await;
    assert!(res.is_err(), "a second singleton id must be rejected by the store");
    Ok(())
}
