//! Create `module` table. Pages are addressed publicly by `slug`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Module::Table)
                    .if_not_exists()
                    .col(pk_auto(Module::Id))
                    .col(string_len(Module::Name, 100).unique_key())
                    .col(string_len(Module::Slug, 100).unique_key())
                    .col(string_len(Module::HeroHeading, 200))
                    .col(text(Module::HeroDescription))
                    .col(text(Module::Content))
                    .col(string_len_null(Module::FeaturedImage, 255))
                    .col(integer(Module::Order).default(0))
                    .col(boolean(Module::IsActive).default(true))
                    .col(timestamp_with_time_zone(Module::CreatedAt))
                    .col(timestamp_with_time_zone(Module::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Module::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Module {
    Table,
    Id,
    Name,
    Slug,
    HeroHeading,
    HeroDescription,
    Content,
    FeaturedImage,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
