//! Migrator registering one migration per content domain.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_clients;
mod m20240501_000002_create_contact;
mod m20240501_000003_create_hardware;
mod m20240501_000004_create_home;
mod m20240501_000005_create_modules;
mod m20240501_000006_add_indexes;

/// Primary key value of every single-row configuration table.
pub const SINGLETON_ID: i32 = 1;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_clients::Migration),
            Box::new(m20240501_000002_create_contact::Migration),
            Box::new(m20240501_000003_create_hardware::Migration),
            Box::new(m20240501_000004_create_home::Migration),
            Box::new(m20240501_000005_create_modules::Migration),
            // Indexes should always be applied last
            Box::new(m20240501_000006_add_indexes::Migration),
        ]
    }
}
