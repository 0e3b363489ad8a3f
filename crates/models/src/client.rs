use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::content::{self, Editable, Ranked};
use crate::errors::ModelError;
use crate::category;

pub const NAME_MAX: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Media path of the logo, relative to the media root.
    pub logo: Option<String>,
    pub category_id: Option<i32>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Ranked for Entity {
    fn id_column() -> Column { Column::Id }
    fn rank_column() -> Column { Column::Order }
    fn active_column() -> Column { Column::IsActive }
    fn name_column() -> Option<Column> { Some(Column::Name) }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientInput {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "content::default_active")]
    pub is_active: bool,
}

impl Editable for ClientInput {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        content::required("name", &self.name, NAME_MAX)?;
        content::optional_media("logo", self.logo.as_deref())?;
        content::validate_order(self.order)
    }

    fn apply(self, am: &mut ActiveModel) {
        let now: DateTimeWithTimeZone = Utc::now().into();
        am.name = Set(self.name.trim().to_string());
        am.logo = Set(content::media_ref(self.logo));
        am.category_id = Set(self.category_id);
        am.order = Set(self.order);
        am.is_active = Set(self.is_active);
        if am.created_at.is_not_set() {
            am.created_at = Set(now);
        }
        am.updated_at = Set(now);
    }
}
