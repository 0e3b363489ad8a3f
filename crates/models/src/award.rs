use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::content::{self, Editable, Ranked};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "award")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub image: String,
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
pub struct AwardInput {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "content::default_active")]
    pub is_active: bool,
}

impl Editable for AwardInput {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        content::required("name", &self.name, 100)?;
        content::required("image", &self.image, 255)?;
        content::validate_order(self.order)
    }

    fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.image = Set(self.image.trim().to_string());
        am.order = Set(self.order);
        am.is_active = Set(self.is_active);
    }
}
