use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::content::{self, Editable, Ranked};
use crate::errors::ModelError;

pub const ICONS: &[&str] = &["CameraIcon", "FingerPrintIcon", "BoltIcon", "ShieldCheckIcon"];

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "device")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub tagline: String,
    pub image: Option<String>,
    /// One specification per line.
    #[sea_orm(column_type = "Text")]
    pub specs: String,
    pub icon: String,
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

impl Model {
    pub fn specs_list(&self) -> Vec<String> {
        split_specs(&self.specs)
    }
}

/// Split line-delimited specs, dropping blank lines. `\r\n` endings are accepted.
pub fn split_specs(specs: &str) -> Vec<String> {
    specs
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceInput {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub specs: String,
    pub icon: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "content::default_active")]
    pub is_active: bool,
}

impl Editable for DeviceInput {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        content::required("name", &self.name, 100)?;
        content::bounded("tagline", &self.tagline, 200)?;
        content::optional_media("image", self.image.as_deref())?;
        content::validate_choice("icon", &self.icon, ICONS)?;
        content::validate_order(self.order)
    }

    fn apply(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.tagline = Set(self.tagline);
        am.image = Set(content::media_ref(self.image));
        am.specs = Set(self.specs);
        am.icon = Set(self.icon);
        am.order = Set(self.order);
        am.is_active = Set(self.is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(split_specs("A\nB\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn crlf_and_padding_are_trimmed() {
        assert_eq!(split_specs("  3000 faces\r\n\r\n  TCP/IP  \r\n"), vec!["3000 faces", "TCP/IP"]);
        assert!(split_specs("").is_empty());
    }
}
