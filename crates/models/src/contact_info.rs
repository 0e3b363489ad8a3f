//! Site-wide contact details. Exactly one row, see [`crate::singleton`].

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::errors::ModelError;
use crate::singleton::{self, SINGLETON_ID};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub address_line1: String,
    pub address_line2: String,
    pub city_state_zip: String,
    pub sales_phone: String,
    pub support_phone: String,
    pub info_email: String,
    pub support_email: String,
    pub hours_weekday: String,
    pub hours_saturday: String,
    pub hours_sunday: String,
    /// Google Maps embed URL.
    pub map_embed_url: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn defaults() -> ActiveModel {
    ActiveModel {
        id: Set(SINGLETON_ID),
        address_line1: Set(String::new()),
        address_line2: Set(String::new()),
        city_state_zip: Set(String::new()),
        sales_phone: Set(String::new()),
        support_phone: Set(String::new()),
        info_email: Set(String::new()),
        support_email: Set(String::new()),
        hours_weekday: Set("9:00 AM - 6:00 PM".into()),
        hours_saturday: Set("10:00 AM - 2:00 PM".into()),
        hours_sunday: Set("Closed".into()),
        map_embed_url: Set(String::new()),
        updated_at: Set(Utc::now().into()),
    }
}

pub async fn load<C: ConnectionTrait>(db: &C) -> Result<Model, ModelError> {
    Ok(singleton::load_or_create(db, defaults()).await?)
}

pub async fn save<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, ModelError> {
    Ok(singleton::save::<ActiveModel, C>(db, model).await?)
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInfoUpdate {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city_state_zip: Option<String>,
    pub sales_phone: Option<String>,
    pub support_phone: Option<String>,
    pub info_email: Option<String>,
    pub support_email: Option<String>,
    pub hours_weekday: Option<String>,
    pub hours_saturday: Option<String>,
    pub hours_sunday: Option<String>,
    pub map_embed_url: Option<String>,
}

impl ContactInfoUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        let limits: [(&str, &Option<String>, usize); 11] = [
            ("address_line1", &self.address_line1, 255),
            ("address_line2", &self.address_line2, 255),
            ("city_state_zip", &self.city_state_zip, 255),
            ("sales_phone", &self.sales_phone, 50),
            ("support_phone", &self.support_phone, 50),
            ("info_email", &self.info_email, 254),
            ("support_email", &self.support_email, 254),
            ("hours_weekday", &self.hours_weekday, 100),
            ("hours_saturday", &self.hours_saturday, 100),
            ("hours_sunday", &self.hours_sunday, 100),
            ("map_embed_url", &self.map_embed_url, 500),
        ];
        for (field, value, max) in limits {
            if let Some(v) = value {
                content::bounded(field, v, max)?;
            }
        }
        for (field, value) in [("info_email", &self.info_email), ("support_email", &self.support_email)] {
            if let Some(v) = value {
                if !v.is_empty() && !v.contains('@') {
                    return Err(ModelError::Validation(format!("{field} is not a valid email")));
                }
            }
        }
        Ok(())
    }

    pub fn apply(self, m: &mut Model) {
        let Self {
            address_line1,
            address_line2,
            city_state_zip,
            sales_phone,
            support_phone,
            info_email,
            support_email,
            hours_weekday,
            hours_saturday,
            hours_sunday,
            map_embed_url,
        } = self;
        if let Some(v) = address_line1 {
            m.address_line1 = v;
        }
        if let Some(v) = address_line2 {
            m.address_line2 = v;
        }
        if let Some(v) = city_state_zip {
            m.city_state_zip = v;
        }
        if let Some(v) = sales_phone {
            m.sales_phone = v;
        }
        if let Some(v) = support_phone {
            m.support_phone = v;
        }
        if let Some(v) = info_email {
            m.info_email = v;
        }
        if let Some(v) = support_email {
            m.support_email = v;
        }
        if let Some(v) = hours_weekday {
            m.hours_weekday = v;
        }
        if let Some(v) = hours_saturday {
            m.hours_saturday = v;
        }
        if let Some(v) = hours_sunday {
            m.hours_sunday = v;
        }
        if let Some(v) = map_embed_url {
            m.map_embed_url = v;
        }
        m.updated_at = Utc::now().into();
    }
}
