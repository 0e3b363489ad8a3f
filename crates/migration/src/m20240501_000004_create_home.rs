//! Create home page tables: the single `hero_section` row plus the ranked
//! strips shown below it.
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
                    .table(HeroSection::Table)
                    .if_not_exists()
                    .col(integer(HeroSection::Id).primary_key())
                    .col(string_len(HeroSection::Heading, 200))
                    .col(text(HeroSection::Description))
                    .col(string_len(HeroSection::PrimaryButtonText, 50))
                    .col(string_len(HeroSection::PrimaryButtonLink, 200))
                    .col(string_len(HeroSection::SecondaryButtonText, 50))
                    .col(string_len(HeroSection::SecondaryButtonLink, 200))
                    .col(string_len_null(HeroSection::BackgroundImage, 255))
                    .col(boolean(HeroSection::IsActive).default(true))
                    .col(timestamp_with_time_zone(HeroSection::UpdatedAt))
                    .check(Expr::col(HeroSection::Id).eq(SINGLETON_ID))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WhyChooseFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(WhyChooseFeature::Id))
                    .col(string_len(WhyChooseFeature::Title, 100))
                    .col(integer(WhyChooseFeature::Order).default(0))
                    .col(boolean(WhyChooseFeature::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AppFeature::Table)
                    .if_not_exists()
                    .col(pk_auto(AppFeature::Id))
                    .col(string_len(AppFeature::Description, 200))
                    .col(integer(AppFeature::Order).default(0))
                    .col(boolean(AppFeature::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Stat::Table)
                    .if_not_exists()
                    .col(pk_auto(Stat::Id))
                    .col(string_len(Stat::Value, 50))
                    .col(string_len(Stat::Label, 100))
                    .col(integer(Stat::Order).default(0))
                    .col(boolean(Stat::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonial::Table)
                    .if_not_exists()
                    .col(pk_auto(Testimonial::Id))
                    .col(text(Testimonial::Quote))
                    .col(string_len(Testimonial::AuthorName, 100))
                    .col(string_len(Testimonial::AuthorTitle, 100))
                    .col(string_len_null(Testimonial::AuthorImage, 255))
                    .col(integer(Testimonial::Order).default(0))
                    .col(boolean(Testimonial::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        // certification and award share a shape
        for table in [Badge::Certification, Badge::Award] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(pk_auto(Badge::Id))
                        .col(string_len(Badge::Name, 100))
                        .col(string_len(Badge::Image, 255))
                        .col(integer(Badge::Order).default(0))
                        .col(boolean(Badge::IsActive).default(true))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Badge::Award).to_owned()).await?;
        manager.drop_table(Table::drop().table(Badge::Certification).to_owned()).await?;
        manager.drop_table(Table::drop().table(Testimonial::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Stat::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(AppFeature::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(WhyChooseFeature::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HeroSection::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HeroSection {
    Table,
    Id,
    Heading,
    Description,
    PrimaryButtonText,
    PrimaryButtonLink,
    SecondaryButtonText,
    SecondaryButtonLink,
    BackgroundImage,
    IsActive,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum WhyChooseFeature { Table, Id, Title, Order, IsActive }

#[derive(DeriveIden)]
enum AppFeature { Table, Id, Description, Order, IsActive }

#[derive(DeriveIden)]
enum Stat { Table, Id, Value, Label, Order, IsActive }

#[derive(DeriveIden)]
enum Testimonial { Table, Id, Quote, AuthorName, AuthorTitle, AuthorImage, Order, IsActive }

#[derive(DeriveIden, Clone, Copy)]
enum Badge { Certification, Award, Id, Name, Image, Order, IsActive }
