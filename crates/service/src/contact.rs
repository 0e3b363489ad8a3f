use models::{contact_info, contact_message};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use tracing::{info, instrument};

use crate::dto::{ContactAck, ContactInfoOut};
use crate::errors::ServiceError;

/// Public contact details, created with defaults on first read.
#[instrument(skip(db))]
pub async fn contact_info<C: ConnectionTrait>(db: &C) -> Result<ContactInfoOut, ServiceError> {
    Ok(contact_info::load(db).await?.into())
}

/// Validate and store a visitor message. Nothing is written when validation fails.
#[instrument(skip_all)]
pub async fn submit_message<C: ConnectionTrait>(
    db: &C,
    input: contact_message::NewContactMessage,
) -> Result<ContactAck, ServiceError> {
    let valid = input.validate()?;
    let saved = contact_message::create(db, valid).await?;
    info!(message_id = saved.id, "contact message stored");
    Ok(ContactAck::sent())
}

/// Inbox, newest first, optionally narrowed by read state.
pub async fn list_messages<C: ConnectionTrait>(
    db: &C,
    is_read: Option<bool>,
) -> Result<Vec<contact_message::Model>, ServiceError> {
    let mut select = contact_message::inbox();
    if let Some(flag) = is_read {
        select = select.filter(contact_message::Column::IsRead.eq(flag));
    }
    Ok(select.all(db).await?)
}

/// Flag the given messages read. Unknown ids are ignored; returns rows changed.
pub async fn mark_read<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<u64, ServiceError> {
    if ids.is_empty() {
        return Ok(0);
    }
    let res = contact_message::Entity::update_many()
        .col_expr(contact_message::Column::IsRead, Expr::value(true))
        .filter(contact_message::Column::Id.is_in(ids.iter().copied()))
        .filter(contact_message::Column::IsRead.eq(false))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

pub async fn delete_message<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = contact_message::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("contact message"));
    }
    Ok(())
}
