use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::content::{self, Editable, Ranked};
use crate::errors::ModelError;

pub const NAME_MAX: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Client }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::has_many(super::client::Entity).into(),
        }
    }
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Ranked for Entity {
    fn id_column() -> Column { Column::Id }
    fn rank_column() -> Column { Column::Order }
    fn active_column() -> Column { Column::IsActive }
    fn name_column() -> Option<Column> { Some(Column::Name) }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "content::default_active")]
    pub is_active: bool,
}

impl Editable for CategoryInput {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        content::required("name", &self.name, NAME_MAX)?;
        content::validate_order(self.order)
    }

    fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name.trim().to_string());
        am.order = Set(self.order);
        am.is_active = Set(self.is_active);
    }
}
