//! Create `category` and `client` tables.
//!
//! Deleting a category keeps its clients and clears their `category_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string_len(Category::Name, 100).unique_key())
                    .col(integer(Category::Order).default(0))
                    .col(boolean(Category::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(string_len(Client::Name, 200))
                    .col(string_len_null(Client::Logo, 255))
                    .col(integer_null(Client::CategoryId))
                    .col(integer(Client::Order).default(0))
                    .col(boolean(Client::IsActive).default(true))
                    .col(timestamp_with_time_zone(Client::CreatedAt))
                    .col(timestamp_with_time_zone(Client::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_category")
                            .from(Client::Table, Client::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Client::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Category::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Category { Table, Id, Name, Order, IsActive }

#[derive(DeriveIden)]
enum Client {
    Table,
    Id,
    Name,
    Logo,
    CategoryId,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
