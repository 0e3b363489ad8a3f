//! Administration of every ranked content kind through one registry.
//!
//! [`ContentKind`] names the twelve editable kinds. Each operation resolves
//! the kind to its entity and input type with a plain `match`, then runs one
//! generic implementation. Records travel as JSON so the HTTP layer stays
//! kind-agnostic.

use std::fmt;
use std::str::FromStr;

use models::content::{all_ordered, Editable, RankPatch, Ranked};
use models::{
    app_feature, award, category, certification, client, device, hardware_feature, module, office_address, stat,
    testimonial, why_choose_feature,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter, TransactionTrait,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Categories,
    Clients,
    HardwareFeatures,
    Devices,
    Offices,
    WhyChooseFeatures,
    AppFeatures,
    Stats,
    Testimonials,
    Certifications,
    Awards,
    Modules,
}

impl ContentKind {
    pub const ALL: [ContentKind; 12] = [
        ContentKind::Categories,
        ContentKind::Clients,
        ContentKind::HardwareFeatures,
        ContentKind::Devices,
        ContentKind::Offices,
        ContentKind::WhyChooseFeatures,
        ContentKind::AppFeatures,
        ContentKind::Stats,
        ContentKind::Testimonials,
        ContentKind::Certifications,
        ContentKind::Awards,
        ContentKind::Modules,
    ];

    /// Path segment used under `/admin/content/`.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Categories => "categories",
            ContentKind::Clients => "clients",
            ContentKind::HardwareFeatures => "hardware-features",
            ContentKind::Devices => "devices",
            ContentKind::Offices => "offices",
            ContentKind::WhyChooseFeatures => "why-choose-features",
            ContentKind::AppFeatures => "app-features",
            ContentKind::Stats => "stats",
            ContentKind::Testimonials => "testimonials",
            ContentKind::Certifications => "certifications",
            ContentKind::Awards => "awards",
            ContentKind::Modules => "modules",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ContentKind::Categories => "category",
            ContentKind::Clients => "client",
            ContentKind::HardwareFeatures => "hardware feature",
            ContentKind::Devices => "device",
            ContentKind::Offices => "office address",
            ContentKind::WhyChooseFeatures => "why-choose feature",
            ContentKind::AppFeatures => "app feature",
            ContentKind::Stats => "stat",
            ContentKind::Testimonials => "testimonial",
            ContentKind::Certifications => "certification",
            ContentKind::Awards => "award",
            ContentKind::Modules => "module",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ServiceError::NotFound(format!("unknown content kind {s:?}")))
    }
}

/// Bind `$entity` and `$input` to the kind's entity and input types, then run `$body`.
macro_rules! with_kind {
    ($kind:expr, |$entity:ident, $input:ident| $body:expr) => {
        match $kind {
            ContentKind::Categories => with_kind!(@bind $entity = category::Entity, $input = category::CategoryInput, $body),
            ContentKind::Clients => with_kind!(@bind $entity = client::Entity, $input = client::ClientInput, $body),
            ContentKind::HardwareFeatures => with_kind!(@bind $entity = hardware_feature::Entity, $input = hardware_feature::HardwareFeatureInput, $body),
            ContentKind::Devices => with_kind!(@bind $entity = device::Entity, $input = device::DeviceInput, $body),
            ContentKind::Offices => with_kind!(@bind $entity = office_address::Entity, $input = office_address::OfficeAddressInput, $body),
            ContentKind::WhyChooseFeatures => with_kind!(@bind $entity = why_choose_feature::Entity, $input = why_choose_feature::WhyChooseFeatureInput, $body),
            ContentKind::AppFeatures => with_kind!(@bind $entity = app_feature::Entity, $input = app_feature::AppFeatureInput, $body),
            ContentKind::Stats => with_kind!(@bind $entity = stat::Entity, $input = stat::StatInput, $body),
            ContentKind::Testimonials => with_kind!(@bind $entity = testimonial::Entity, $input = testimonial::TestimonialInput, $body),
            ContentKind::Certifications => with_kind!(@bind $entity = certification::Entity, $input = certification::CertificationInput, $body),
            ContentKind::Awards => with_kind!(@bind $entity = award::Entity, $input = award::AwardInput, $body),
            ContentKind::Modules => with_kind!(@bind $entity = module::Entity, $input = module::ModuleInput, $body),
        }
    };
    (@bind $entity:ident = $e:ty, $input:ident = $i:ty, $body:expr) => {{
        #[allow(dead_code)]
        type $entity = $e;
        #[allow(dead_code)]
        type $input = $i;
        $body
    }};
}

type ModelOf<I> = <<I as Editable>::Entity as EntityTrait>::Model;

fn parse<I: DeserializeOwned>(body: Value) -> Result<I, ServiceError> {
    serde_json::from_value(body).map_err(|e| ServiceError::Validation(e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ServiceError> {
    serde_json::to_value(value).map_err(|e| ServiceError::Internal(e.to_string()))
}

async fn find_one<E, C>(db: &C, kind: ContentKind, id: i32) -> Result<E::Model, ServiceError>
where
    E: Ranked,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(kind.label()))
}

async fn list_all<E, C>(db: &C) -> Result<Value, ServiceError>
where
    E: Ranked,
    E::Model: Serialize,
    C: ConnectionTrait,
{
    let rows = all_ordered::<E>().all(db).await?;
    to_json(&rows)
}

async fn insert<I, C>(db: &C, input: I) -> Result<Value, ServiceError>
where
    I: Editable,
    ModelOf<I>: IntoActiveModel<I::ActiveModel> + Serialize,
    C: ConnectionTrait,
{
    input.validate()?;
    let mut am = <I::ActiveModel as ActiveModelTrait>::default();
    input.apply(&mut am);
    let model = am.insert(db).await?;
    to_json(&model)
}

async fn overwrite<I, C>(db: &C, kind: ContentKind, id: i32, input: I) -> Result<Value, ServiceError>
where
    I: Editable,
    ModelOf<I>: IntoActiveModel<I::ActiveModel> + Serialize,
    C: ConnectionTrait,
{
    input.validate()?;
    let current = find_one::<I::Entity, C>(db, kind, id).await?;
    let mut am: I::ActiveModel = current.into_active_model();
    input.apply(&mut am);
    let model = am.update(db).await?;
    to_json(&model)
}

async fn patch_rank<E, C>(db: &C, kind: ContentKind, id: i32, patch: RankPatch) -> Result<Value, ServiceError>
where
    E: Ranked,
    E::Model: Serialize,
    C: ConnectionTrait,
{
    patch.validate()?;
    let mut update = E::update_many().filter(E::id_column().eq(id));
    if let Some(order) = patch.order {
        update = update.col_expr(E::rank_column(), Expr::value(order));
    }
    if let Some(is_active) = patch.is_active {
        update = update.col_expr(E::active_column(), Expr::value(is_active));
    }
    if update.exec(db).await?.rows_affected == 0 {
        return Err(ServiceError::not_found(kind.label()));
    }
    let model = find_one::<E, C>(db, kind, id).await?;
    to_json(&model)
}

async fn remove<E, C>(db: &C, kind: ContentKind, id: i32) -> Result<(), ServiceError>
where
    E: Ranked,
    C: ConnectionTrait,
{
    let res = E::delete_many().filter(E::id_column().eq(id)).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(kind.label()));
    }
    Ok(())
}

async fn ensure_category<C: ConnectionTrait>(db: &C, category_id: Option<i32>) -> Result<(), ServiceError> {
    let Some(id) = category_id else { return Ok(()) };
    if category::Entity::find_by_id(id).one(db).await?.is_none() {
        return Err(ServiceError::Validation(format!("category {id} does not exist")));
    }
    Ok(())
}

/// Detach clients first so the policy holds even where the store skips FK actions.
async fn delete_category<C>(db: &C, id: i32) -> Result<(), ServiceError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let detached = client::Entity::update_many()
        .col_expr(client::Column::CategoryId, Expr::value(Option::<i32>::None))
        .filter(client::Column::CategoryId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;
    remove::<category::Entity, _>(&txn, ContentKind::Categories, id).await?;
    txn.commit().await?;
    info!(category_id = id, detached, "category deleted");
    Ok(())
}

/// Every record of `kind`, active or not, in display order.
pub async fn list<C: ConnectionTrait>(db: &C, kind: ContentKind) -> Result<Value, ServiceError> {
    with_kind!(kind, |E, I| list_all::<E, C>(db).await)
}

pub async fn get<C: ConnectionTrait>(db: &C, kind: ContentKind, id: i32) -> Result<Value, ServiceError> {
    with_kind!(kind, |E, I| to_json(&find_one::<E, C>(db, kind, id).await?))
}

pub async fn create<C: ConnectionTrait>(db: &C, kind: ContentKind, body: Value) -> Result<Value, ServiceError> {
    let created = if kind == ContentKind::Clients {
        let input: client::ClientInput = parse(body)?;
        ensure_category(db, input.category_id).await?;
        insert(db, input).await?
    } else {
        with_kind!(kind, |E, I| insert(db, parse::<I>(body)?).await?)
    };
    info!(%kind, id = ?created.get("id"), "content created");
    Ok(created)
}

/// Replace every editable field of one record.
pub async fn replace<C: ConnectionTrait>(
    db: &C,
    kind: ContentKind,
    id: i32,
    body: Value,
) -> Result<Value, ServiceError> {
    if kind == ContentKind::Clients {
        let input: client::ClientInput = parse(body)?;
        ensure_category(db, input.category_id).await?;
        return overwrite(db, kind, id, input).await;
    }
    with_kind!(kind, |E, I| overwrite(db, kind, id, parse::<I>(body)?).await)
}

/// Change only rank and visibility.
pub async fn patch<C: ConnectionTrait>(
    db: &C,
    kind: ContentKind,
    id: i32,
    patch: RankPatch,
) -> Result<Value, ServiceError> {
    with_kind!(kind, |E, I| patch_rank::<E, C>(db, kind, id, patch).await)
}

pub async fn delete<C>(db: &C, kind: ContentKind, id: i32) -> Result<(), ServiceError>
where
    C: ConnectionTrait + TransactionTrait,
{
    if kind == ContentKind::Categories {
        return delete_category(db, id).await;
    }
    with_kind!(kind, |E, I| remove::<E, C>(db, kind, id).await)?;
    info!(%kind, id, "content deleted");
    Ok(())
}
