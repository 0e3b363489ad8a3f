//! Admin reads and partial updates of the single-row records.

use models::{contact_info, distributor_info, hero_section};
use sea_orm::ConnectionTrait;
use tracing::info;

use crate::errors::ServiceError;

pub async fn get_contact_info<C: ConnectionTrait>(db: &C) -> Result<contact_info::Model, ServiceError> {
    Ok(contact_info::load(db).await?)
}

pub async fn update_contact_info<C: ConnectionTrait>(
    db: &C,
    update: contact_info::ContactInfoUpdate,
) -> Result<contact_info::Model, ServiceError> {
    update.validate()?;
    let mut current = contact_info::load(db).await?;
    update.apply(&mut current);
    let saved = contact_info::save(db, current).await?;
    info!(record = "contact_info", "singleton updated");
    Ok(saved)
}

pub async fn get_hero<C: ConnectionTrait>(db: &C) -> Result<hero_section::Model, ServiceError> {
    Ok(hero_section::load(db).await?)
}

pub async fn update_hero<C: ConnectionTrait>(
    db: &C,
    update: hero_section::HeroSectionUpdate,
) -> Result<hero_section::Model, ServiceError> {
    update.validate()?;
    let mut current = hero_section::load(db).await?;
    update.apply(&mut current);
    let saved = hero_section::save(db, current).await?;
    info!(record = "hero_section", "singleton updated");
    Ok(saved)
}

pub async fn get_distributor<C: ConnectionTrait>(db: &C) -> Result<distributor_info::Model, ServiceError> {
    Ok(distributor_info::load(db).await?)
}

pub async fn update_distributor<C: ConnectionTrait>(
    db: &C,
    update: distributor_info::DistributorInfoUpdate,
) -> Result<distributor_info::Model, ServiceError> {
    update.validate()?;
    let mut current = distributor_info::load(db).await?;
    update.apply(&mut current);
    let saved = distributor_info::save(db, current).await?;
    info!(record = "distributor_info", "singleton updated");
    Ok(saved)
}
