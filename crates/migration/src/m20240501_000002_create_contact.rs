//! Create `contact_info` (single row) and `contact_message` tables.
use sea_orm_migration::{prelude::*, schema::*};

use crate::SINGLETON_ID;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactInfo::Table)
                    .if_not_exists()
                    .col(integer(ContactInfo::Id).primary_key())
                    .col(string_len(ContactInfo::AddressLine1, 255))
                    .col(string_len(ContactInfo::AddressLine2, 255))
                    .col(string_len(ContactInfo::CityStateZip, 255))
                    .col(string_len(ContactInfo::SalesPhone, 50))
                    .col(string_len(ContactInfo::SupportPhone, 50))
                    .col(string_len(ContactInfo::InfoEmail, 254))
                    .col(string_len(ContactInfo::SupportEmail, 254))
                    .col(string_len(ContactInfo::HoursWeekday, 100))
                    .col(string_len(ContactInfo::HoursSaturday, 100))
                    .col(string_len(ContactInfo::HoursSunday, 100))
                    .col(string_len(ContactInfo::MapEmbedUrl, 500))
                    .col(timestamp_with_time_zone(ContactInfo::UpdatedAt))
                    .check(Expr::col(ContactInfo::Id).eq(SINGLETON_ID))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactMessage::Id))
                    .col(string_len(ContactMessage::Name, 200))
                    .col(string_len(ContactMessage::Email, 254))
                    .col(string_len(ContactMessage::Subject, 300))
                    .col(text(ContactMessage::Message))
                    .col(timestamp_with_time_zone(ContactMessage::CreatedAt))
                    .col(boolean(ContactMessage::IsRead).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContactMessage::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ContactInfo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ContactInfo {
    Table,
    Id,
    #[sea_orm(iden = "address_line1")]
    AddressLine1,
    #[sea_orm(iden = "address_line2")]
    AddressLine2,
    CityStateZip,
    SalesPhone,
    SupportPhone,
    InfoEmail,
    SupportEmail,
    HoursWeekday,
    HoursSaturday,
    HoursSunday,
    MapEmbedUrl,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactMessage { Table, Id, Name, Email, Subject, Message, CreatedAt, IsRead }
