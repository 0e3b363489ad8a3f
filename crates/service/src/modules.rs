use models::module;
use sea_orm::ConnectionTrait;
use tracing::instrument;

use crate::dto::ModuleOut;
use crate::errors::ServiceError;
use crate::listing;
use crate::media::MediaUrls;

/// Message body for unknown or inactive slugs.
pub const MODULE_NOT_FOUND: &str = "Module not found";

#[instrument(skip_all)]
pub async fn list_modules<C: ConnectionTrait>(db: &C, media: &MediaUrls) -> Result<Vec<ModuleOut>, ServiceError> {
    listing::active::<module::Entity, _, _, _>(db, |m| ModuleOut::from_model(m, media)).await
}

/// A single active module. Inactive modules are indistinguishable from missing ones.
#[instrument(skip(db, media))]
pub async fn module_detail<C: ConnectionTrait>(
    db: &C,
    media: &MediaUrls,
    slug: &str,
) -> Result<ModuleOut, ServiceError> {
    module::find_active_by_slug(db, slug)
        .await?
        .map(|m| ModuleOut::from_model(m, media))
        .ok_or_else(|| ServiceError::NotFound(MODULE_NOT_FOUND.into()))
}
