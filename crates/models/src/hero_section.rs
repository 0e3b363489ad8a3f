//! Home page hero banner. Single row.

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::errors::ModelError;
use crate::singleton::{self, SINGLETON_ID};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hero_section")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub heading: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    pub background_image: Option<String>,
    pub is_active: bool,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn defaults() -> ActiveModel {
    ActiveModel {
        id: Set(SINGLETON_ID),
        heading: Set(String::new()),
        description: Set(String::new()),
        primary_button_text: Set("Request a Demo".into()),
        primary_button_link: Set("/request-demo".into()),
        secondary_button_text: Set("Explore Modules".into()),
        secondary_button_link: Set("/modules".into()),
        background_image: Set(None),
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

/// Partial update. `background_image: ""` clears the image; omitting it keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroSectionUpdate {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub primary_button_text: Option<String>,
    pub primary_button_link: Option<String>,
    pub secondary_button_text: Option<String>,
    pub secondary_button_link: Option<String>,
    pub background_image: Option<String>,
    pub is_active: Option<bool>,
}

impl HeroSectionUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(v) = &self.heading {
            content::bounded("heading", v, 200)?;
        }
        for (field, value, max) in [
            ("primary_button_text", &self.primary_button_text, 50),
            ("primary_button_link", &self.primary_button_link, 200),
            ("secondary_button_text", &self.secondary_button_text, 50),
            ("secondary_button_link", &self.secondary_button_link, 200),
            ("background_image", &self.background_image, 255),
        ] {
            if let Some(v) = value {
                content::bounded(field, v, max)?;
            }
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
        if let Some(v) = self.primary_button_text {
            m.primary_button_text = v;
        }
        if let Some(v) = self.primary_button_link {
            m.primary_button_link = v;
        }
        if let Some(v) = self.secondary_button_text {
            m.secondary_button_text = v;
        }
        if let Some(v) = self.secondary_button_link {
            m.secondary_button_link = v;
        }
        if self.background_image.is_some() {
            m.background_image = content::media_ref(self.background_image);
        }
        if let Some(v) = self.is_active {
            m.is_active = v;
        }
        m.updated_at = Utc::now().into();
    }
}
