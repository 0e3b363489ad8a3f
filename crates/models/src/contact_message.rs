use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::errors::ModelError;

pub const NAME_MAX: usize = 200;
pub const EMAIL_MAX: usize = 254;
pub const SUBJECT_MAX: usize = 300;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
    pub is_read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A visitor submission. Every field is optional on the wire so that a
/// missing field is reported as a validation error, not a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Submission with every field checked present and within bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

impl NewContactMessage {
    pub fn validate(self) -> Result<ValidContactMessage, ModelError> {
        fn present(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }
        let (Some(name), Some(email), Some(subject), Some(message)) =
            (present(self.name), present(self.email), present(self.subject), present(self.message))
        else {
            return Err(ModelError::Validation(ALL_FIELDS_REQUIRED.into()));
        };
        content::bounded("name", &name, NAME_MAX)?;
        content::bounded("email", &email, EMAIL_MAX)?;
        content::bounded("subject", &subject, SUBJECT_MAX)?;
        Ok(ValidContactMessage { name, email, subject, message })
    }
}

/// Insert a validated message; the store stamps `created_at` and `is_read = false`.
pub async fn create<C: ConnectionTrait>(db: &C, msg: ValidContactMessage) -> Result<Model, ModelError> {
    let am = ActiveModel {
        name: Set(msg.name),
        email: Set(msg.email),
        subject: Set(msg.subject),
        message: Set(msg.message),
        created_at: Set(Utc::now().into()),
        is_read: Set(false),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Inbox order: newest first.
pub fn inbox() -> Select<Entity> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}
