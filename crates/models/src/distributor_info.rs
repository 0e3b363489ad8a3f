//! The "sole distributor" banner on the hardware page. Single row.

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::errors::ModelError;
use crate::singleton::{self, SINGLETON_ID};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "distributor_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub heading: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub button_text: String,
    pub button_link: String,
    pub is_active: bool,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn defaults() -> ActiveModel {
    ActiveModel {
        id: Set(SINGLETON_ID),
        heading: Set("Sole Distributor of ZK biometric devices in Pakistan".into()),
        description: Set(String::new()),
        button_text: Set("Contact Us for Bulk Orders".into()),
        button_link: Set("/contact".into()),
        is_active: Set(true),
        updated_at: Set(Utc::now().into()),
    }
}

pub async fn load<C: ConnectionTrait>(db: &C) -> Result<Model, ModelError> {
    Ok(singleton::load_or_create(db, defaults()).await?)
}

pub async fn save<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    Ok(singleton::save::<ActiveModel, C>(db, model).await?)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistributorInfoUpdate {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub is_active: Option<bool>,
}

impl DistributorInfoUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(v) = &self.heading {
            content::required("heading", v, 200)?;
        }
        if let Some(v) = &self.button_text {
            content::bounded("button_text", v, 50)?;
        }
        if let Some(v) = &self.button_link {
            content::bounded("button_link", v, 200)?;
        }
        Ok(())
    }

    pub fn apply(self, m: &mut Model) {
        if let Some(v) = self.heading {
            m.heading = v;
        }
        if let Some(v) = self.description {
            m.description = v;
        }
        if let Some(v) = self.button_text {
            m.button_text = v;
        }
        if let Some(v) = self.button_link {
            m.button_link = v;
        }
        if let Some(v) = self.is_active {
            m.is_active = v;
        }
        m.updated_at = Utc::now().into();
    }
}
