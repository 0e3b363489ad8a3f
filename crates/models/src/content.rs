//! Ranked, toggleable content shared by every public listing.
//!
//! A listing shows active rows only, sorted by `order`, then by the entity's
//! secondary key (usually `name`), then by `id` so equal ranks stay stable.

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::{de::DeserializeOwned, Deserialize};

use crate::errors::ModelError;

pub trait Ranked: EntityTrait {
    fn id_column() -> Self::Column;
    fn rank_column() -> Self::Column;
    fn active_column() -> Self::Column;
    /// Secondary sort key for equal ranks.
    fn name_column() -> Option<Self::Column> {
        None
    }
}

/// Apply the listing sort to an arbitrary select.
pub fn ordered<E: Ranked>(select: Select<E>) -> Select<E> {
    let mut select = select.order_by_asc(E::rank_column());
    if let Some(name) = E::name_column() {
        select = select.order_by_asc(name);
    }
    select.order_by_asc(E::id_column())
}

/// Active rows in display order.
pub fn active_ordered<E: Ranked>() -> Select<E> {
    ordered(E::find().filter(E::active_column().eq(true)))
}

/// Every row, including inactive ones, in display order.
pub fn all_ordered<E: Ranked>() -> Select<E> {
    ordered(E::find())
}

/// Full-record input accepted by the admin surface for one ranked entity.
pub trait Editable: DeserializeOwned + Send {
    type Entity: Ranked;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send;

    fn validate(&self) -> Result<(), ModelError>;

    /// Copy the input onto `am`. Called for both inserts and updates.
    fn apply(self, am: &mut Self::ActiveModel);
}

/// The list-editable pair: rank and visibility.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankPatch {
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

impl RankPatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(order) = self.order {
            validate_order(order)?;
        }
        if self.order.is_none() && self.is_active.is_none() {
            return Err(ModelError::Validation("nothing to update".into()));
        }
        Ok(())
    }
}

pub fn default_active() -> bool {
    true
}

pub fn validate_order(order: i32) -> Result<(), ModelError> {
    if order < 0 {
        return Err(ModelError::Validation("order must be non-negative".into()));
    }
    Ok(())
}

/// Non-blank and at most `max` characters.
pub fn required(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    bounded(field, value, max)
}

pub fn bounded(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn validate_choice(field: &str, value: &str, choices: &[&str]) -> Result<(), ModelError> {
    if !choices.contains(&value) {
        return Err(ModelError::Validation(format!("{field} must be one of: {}", choices.join(", "))));
    }
    Ok(())
}

/// Width of every stored media path column.
pub const MEDIA_PATH_MAX: usize = 255;

/// Optional media path must fit its column once trimmed.
pub fn optional_media(field: &str, value: Option<&str>) -> Result<(), ModelError> {
    match value {
        Some(v) => bounded(field, v.trim(), MEDIA_PATH_MAX),
        None => Ok(()),
    }
}

/// Optional media path: blank becomes `None`.
pub fn media_ref(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_long() {
        assert!(required("name", "   ", 10).is_err());
        assert!(required("name", "abcdefghijk", 10).is_err());
        assert!(required("name", "ok", 10).is_ok());
    }

    #[test]
    fn rank_patch_needs_a_field() {
        assert!(RankPatch::default().validate().is_err());
        assert!(RankPatch { order: Some(-1), is_active: None }.validate().is_err());
        assert!(RankPatch { order: None, is_active: Some(false) }.validate().is_ok());
    }

    #[test]
    fn long_media_path_is_rejected() {
        assert!(optional_media("logo", None).is_ok());
        assert!(optional_media("logo", Some(&"a".repeat(MEDIA_PATH_MAX))).is_ok());
        assert!(matches!(
            optional_media("logo", Some(&"a".repeat(MEDIA_PATH_MAX + 1))),
            Err(ModelError::Validation(_))
        ));
    }

    #[test]
    fn blank_media_ref_is_none() {
        assert_eq!(media_ref(Some("  ".into())), None);
        assert_eq!(media_ref(Some("clients/logos/a.png".into())).as_deref(), Some("clients/logos/a.png"));
        assert_eq!(media_ref(None), None);
    }
}
