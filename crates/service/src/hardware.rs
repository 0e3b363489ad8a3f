use models::{device, distributor_info, hardware_feature, office_address};
use sea_orm::ConnectionTrait;
use tracing::instrument;

use crate::dto::{DeviceOut, HardwareBundle, HardwareFeatureOut, OfficeOut};
use crate::errors::ServiceError;
use crate::listing;
use crate::media::MediaUrls;

/// Everything the hardware page renders in one payload.
#[instrument(skip_all)]
pub async fn hardware_bundle<C: ConnectionTrait>(db: &C, media: &MediaUrls) -> Result<HardwareBundle, ServiceError> {
    let features = listing::active::<hardware_feature::Entity, _, _, _>(db, HardwareFeatureOut::from).await?;
    let devices = listing::active::<device::Entity, _, _, _>(db, |m| DeviceOut::from_model(m, media)).await?;
    let distributor = distributor_info::load(db).await?.into();
    let offices = listing::active::<office_address::Entity, _, _, _>(db, OfficeOut::from).await?;
    Ok(HardwareBundle { features, devices, distributor, offices })
}
