#![cfg(test)]
use configs::DatabaseConfig;
use models::db::connect_and_migrate;
use sea_orm::DatabaseConnection;

use crate::media::MediaUrls;

/// Fresh migrated in-memory database; every call is isolated from the others.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}

pub fn media() -> MediaUrls {
    MediaUrls::new("/media/")
}
