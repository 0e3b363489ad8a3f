use models::{category, client};
use rand::seq::SliceRandom;
use sea_orm::{ColumnTrait, ConnectionTrait, QueryFilter};
use tracing::instrument;

use crate::dto::{CategoryOut, ClientLogoOut, ClientOut};
use crate::errors::ServiceError;
use crate::listing;
use crate::media::MediaUrls;

/// Active categories in display order.
#[instrument(skip(db))]
pub async fn list_categories<C: ConnectionTrait>(db: &C) -> Result<Vec<CategoryOut>, ServiceError> {
    listing::active::<category::Entity, _, _, _>(db, CategoryOut::from).await
}

/// Active clients in display order. `None` means no category filter; an id
/// with no clients (or no category) yields an empty list.
#[instrument(skip(db, media))]
pub async fn list_clients<C: ConnectionTrait>(
    db: &C,
    media: &MediaUrls,
    category_id: Option<i32>,
) -> Result<Vec<ClientOut>, ServiceError> {
    listing::active_filtered::<client::Entity, _, _, _, _>(
        db,
        |select| match category_id {
            Some(id) => select.filter(client::Column::CategoryId.eq(id)),
            None => select,
        },
        |m| ClientOut::from_model(m, media),
    )
    .await
}

/// Parse the raw `category` query value. Blank means no filter.
pub fn parse_category_filter(raw: Option<&str>) -> Result<Option<i32>, ServiceError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ServiceError::Validation(format!("category must be an integer id, got {v:?}"))),
    }
}

/// Uniform random sample of at most `limit` active clients.
pub async fn sample_clients<C: ConnectionTrait>(
    db: &C,
    media: &MediaUrls,
    limit: usize,
) -> Result<Vec<ClientLogoOut>, ServiceError> {
    let all = listing::active::<client::Entity, _, _, _>(db, |m| m).await?;
    let picked: Vec<client::Model> = {
        let mut rng = rand::thread_rng();
        all.choose_multiple(&mut rng, limit).cloned().collect()
    };
    Ok(picked.into_iter().map(|m| ClientLogoOut::from_model(m, media)).collect())
}
