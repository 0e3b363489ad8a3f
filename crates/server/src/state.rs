use sea_orm::DatabaseConnection;
use service::errors::ServiceError;
use service::media::MediaUrls;

use crate::errors::JsonApiError;

/// Shared per-request state.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub media: MediaUrls,
    pub expose_internal_errors: bool,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, media: MediaUrls) -> Self {
        Self { db, media, expose_internal_errors: false }
    }

    pub fn reject(&self, e: ServiceError) -> JsonApiError {
        JsonApiError::from_service(e, self.expose_internal_errors)
    }
}
