//! Create hardware catalogue tables: features, devices, the single
//! `distributor_info` row and office addresses.
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
                    .table(HardwareFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(HardwareFeature::Id))
                    .col(string_len(HardwareFeature::Icon, 50))
                    .col(string_len(HardwareFeature::Title, 100))
                    .col(text(HardwareFeature::Description))
                    .col(integer(HardwareFeature::Order).default(0))
                    .col(boolean(HardwareFeature::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Device::Table)
                    .if_not_exists()
                    .col(pk_auto(Device::Id))
                    .col(string_len(Device::Name, 100))
                    .col(string_len(Device::Tagline, 200))
                    .col(string_len_null(Device::Image, 255))
                    .col(text(Device::Specs))
                    .col(string_len(Device::Icon, 50))
                    .col(integer(Device::Order).default(0))
                    .col(boolean(Device::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DistributorInfo::Table)
                    .if_not_exists()
                    .col(integer(DistributorInfo::Id).primary_key())
                    .col(string_len(DistributorInfo::Heading, 200))
                    .col(text(DistributorInfo::Description))
                    .col(string_len(DistributorInfo::ButtonText, 50))
                    .col(string_len(DistributorInfo::ButtonLink, 200))
                    .col(boolean(DistributorInfo::IsActive).default(true))
                    .col(timestamp_with_time_zone(DistributorInfo::UpdatedAt))
                    .check(Expr::col(DistributorInfo::Id).eq(SINGLETON_ID))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OfficeAddress::Table)
                    .if_not_exists()
                    .col(pk_auto(OfficeAddress::Id))
                    .col(string_len(OfficeAddress::LocationName, 100))
                    .col(string_len(OfficeAddress::AddressLine1, 255))
                    .col(string_len(OfficeAddress::AddressLine2, 255))
                    .col(string_len(OfficeAddress::CityStateZip, 255))
                    .col(integer(OfficeAddress::Order).default(0))
                    .col(boolean(OfficeAddress::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OfficeAddress::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(DistributorInfo::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Device::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HardwareFeature::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HardwareFeature { Table, Id, Icon, Title, Description, Order, IsActive }

#[derive(DeriveIden)]
enum Device { Table, Id, Name, Tagline, Image, Specs, Icon, Order, IsActive }

#[derive(DeriveIden)]
enum DistributorInfo { Table, Id, Heading, Description, ButtonText, ButtonLink, IsActive, UpdatedAt }

#[derive(DeriveIden)]
enum OfficeAddress {
    Table,
    Id,
    LocationName,
    #[sea_orm(iden = "address_line1")]
    AddressLine1,
    #[sea_orm(iden = "address_line2")]
    AddressLine2,
    CityStateZip,
    Order,
    IsActive,
}
