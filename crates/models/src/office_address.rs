use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::content::{self, Editable, Ranked};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "office_address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city_state_zip: String,
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
pub struct OfficeAddressInput {
    pub location_name: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub city_state_zip: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "content::default_active")]
    pub is_active: bool,
}

impl Editable for OfficeAddressInput {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        content::required("location_name", &self.location_name, 100)?;
        content::required("address_line1", &self.address_line1, 255)?;
        content::bounded("address_line2", &self.address_line2, 255)?;
        content::bounded("city_state_zip", &self.city_state_zip, 255)?;
        content::validate_order(self.order)
    }

    fn apply(self, am: &mut ActiveModel) {
        am.location_name = Set(self.location_name);
        am.address_line1 = Set(self.address_line1);
        am.address_line2 = Set(self.address_line2);
        am.city_state_zip = Set(self.city_state_zip);
        am.order = Set(self.order);
        am.is_active = Set(self.is_active);
    }
}
