use sea_orm_migration::prelude::*;

/// Tables served through ranked public listings.
const RANKED_TABLES: [&str; 12] = [
    "category",
    "client",
    "hardware_feature",
    "device",
    "office_address",
    "why_choose_feature",
    "app_feature",
    "stat",
    "testimonial",
    "certification",
    "award",
    "module",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listings: filter on is_active, sort on order
        for table in RANKED_TABLES {
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{table}_active_order"))
                        .table(Alias::new(table))
                        .col(Alias::new("is_active"))
                        .col(Alias::new("order"))
                        .to_owned(),
                )
                .await?;
        }

        // Client: filter by category
        manager
            .create_index(
                Index::create()
                    .name("idx_client_category")
                    .table(Client::Table)
                    .col(Client::CategoryId)
                    .to_owned(),
            )
            .await?;

        // ContactMessage: newest-first inbox
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_message_created")
                    .table(ContactMessage::Table)
                    .col(ContactMessage::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in RANKED_TABLES {
            manager
                .drop_index(
                    Index::drop()
                        .name(format!("idx_{table}_active_order"))
                        .table(Alias::new(table))
                        .to_owned(),
                )
                .await?;
        }
        manager
            .drop_index(Index::drop().name("idx_client_category").table(Client::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_message_created").table(ContactMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Client { Table, CategoryId }

#[derive(DeriveIden)]
enum ContactMessage { Table, CreatedAt }
