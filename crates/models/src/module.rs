//! Product module pages, addressed publicly by slug.

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::content::{self, Editable, Ranked};
use crate::errors::ModelError;

pub const NAME_MAX: usize = 100;
pub const SLUG_MAX: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub hero_heading: String,
    #[sea_orm(column_type = "Text")]
    pub hero_description: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub featured_image: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Ranked for Entity {
    fn id_column() -> Column { Column::Id }
    fn rank_column() -> Column { Column::Order }
    fn active_column() -> Column { Column::IsActive }
    fn name_column() -> Option<Column> { Some(Column::Name) }
}

/// Active module with exactly this slug. Inactive modules are not found.
pub async fn find_active_by_slug<C: ConnectionTrait>(db: &C, slug: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::Slug.eq(slug))
        .filter(Column::IsActive.eq(true))
        .one(db)
        .await?)
}

/// URL-safe slug. Accents are folded to ASCII (NFKD), other non-ASCII is
/// dropped. Letters, digits and `_` are kept lowercased; runs of whitespace
/// and `-` become one hyphen; leading and trailing `-`/`_` are trimmed.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_ascii_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }
    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleInput {
    pub name: String,
    /// Derived from `name` when blank.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub hero_heading: String,
    #[serde(default)]
    pub hero_description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "content::default_active")]
    pub is_active: bool,
}

impl ModuleInput {
    pub fn effective_slug(&self) -> String {
        let given = self.slug.trim();
        if given.is_empty() {
            slugify(&self.name)
        } else {
            given.to_string()
        }
    }
}

impl Editable for ModuleInput {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn validate(&self) -> Result<(), ModelError> {
        content::required("name", &self.name, NAME_MAX)?;
        let slug = self.effective_slug();
        if !is_valid_slug(&slug) {
            return Err(ModelError::Validation(
                "slug must contain only lowercase letters, digits, hyphens or underscores".into(),
            ));
        }
        content::bounded("slug", &slug, SLUG_MAX)?;
        content::bounded("hero_heading", &self.hero_heading, 200)?;
        content::optional_media("featured_image", self.featured_image.as_deref())?;
        content::validate_order(self.order)
    }

    fn apply(self, am: &mut ActiveModel) {
        let now: DateTimeWithTimeZone = Utc::now().into();
        am.slug = Set(self.effective_slug());
        am.name = Set(self.name.trim().to_string());
        am.hero_heading = Set(self.hero_heading);
        am.hero_description = Set(self.hero_description);
        am.content = Set(self.content);
        am.featured_image = Set(content::media_ref(self.featured_image));
        am.order = Set(self.order);
        am.is_active = Set(self.is_active);
        if am.created_at.is_not_set() {
            am.created_at = Set(now);
        }
        am.updated_at = Set(now);
    }
}
