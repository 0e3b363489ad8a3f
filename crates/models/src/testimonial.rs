use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::content::{self, Editable, Ranked};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonial")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
    pub author_image: Option<String>,
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
pub struct TestimonialInput {
    pub quote: String,
    pub author_name: String,
    #[serde(default)]
    pub author_title: String,
    #[serde(default)]
    pub author_image: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "content::default_active")]
    pub is_active: bool,
}

impl Editable for TestimonialInput {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        if self.quote.trim().is_empty() {
            return Err(ModelError::Validation("quote required".into()));
        }
        content::required("author_name", &self.author_name, 100)?;
        content::bounded("author_title", &self.author_title, 100)?;
        content::optional_media("author_image", self.author_image.as_deref())?;
        content::validate_order(self.order)
    }

    fn apply(self, am: &mut ActiveModel) {
        am.quote = Set(self.quote);
        am.author_name = Set(self.author_name);
        am.author_title = Set(self.author_title);
        am.author_image = Set(content::media_ref(self.author_image));
        am.order = Set(self.order);
        am.is_active = Set(self.is_active);
    }
}
