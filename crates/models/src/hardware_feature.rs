use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::content::{self, Editable, Ranked};
use crate::errors::ModelError;

pub const ICONS: &[&str] = &["DevicePhoneMobileIcon", "ChartBarIcon", "ShieldCheckIcon"];

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hardware_feature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub icon: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Ranked for Entity {
    fn id_column() -> Column { Column::Id }
    fn rank_column() -> Column { Column::Order }
    fn active_column() -> Column { Column::IsActive }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HardwareFeatureInput {
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "content::default_active")]
    pub is_active: bool,
}

impl Editable for HardwareFeatureInput {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        content::validate_choice("icon", &self.icon, ICONS)?;
        content::required("title", &self.title, 100)?;
        content::validate_order(self.order)
    }

    fn apply(self, am: &mut ActiveModel) {
        am.icon = Set(self.icon);
        am.title = Set(self.title);
        am.description = Set(self.description);
        am.order = Set(self.order);
        am.is_active = Set(self.is_active);
    }
}
