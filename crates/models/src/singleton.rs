//! Single-row configuration tables.
//!
//! Each singleton table has a fixed primary key of [`SINGLETON_ID`] and a
//! `CHECK (id = 1)` constraint. [`load_or_create`] inserts the default row with
//! `ON CONFLICT DO NOTHING`; [`save`] upserts onto the same key whatever id the
//! caller passed. Concurrent callers therefore never produce a second row.

use sea_orm::sea_query::{Iden, OnConflict};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn,
};

pub use migration::SINGLETON_ID;

type ModelOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Model;

fn pin_primary_key<A: ActiveModelTrait>(am: &mut A) {
    for pk in <<A::Entity as EntityTrait>::PrimaryKey as Iterable>::iter() {
        am.set(pk.into_column(), SINGLETON_ID.into());
    }
}

async fn fetch<A, C>(db: &C) -> Result<Option<ModelOf<A>>, DbErr>
where
    A: ActiveModelTrait,
    C: ConnectionTrait,
{
    <A::Entity as EntityTrait>::find().one(db).await
}

/// Insert `defaults` at the fixed key unless a row is already there.
/// Returns whether this call wrote the row; an existing row is left untouched.
pub async fn insert_default<A, C>(db: &C, defaults: A) -> Result<bool, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    ModelOf<A>: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let mut am = defaults;
    pin_primary_key(&mut am);
    let on_conflict = OnConflict::columns(<<A::Entity as EntityTrait>::PrimaryKey as Iterable>::iter())
        .do_nothing()
        .to_owned();
    match <A::Entity as EntityTrait>::insert(am)
        .on_conflict(on_conflict)
        .exec_without_returning(db)
        .await
    {
        Ok(rows) => Ok(rows > 0),
        Err(DbErr::RecordNotInserted) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Return the single row, creating it from `defaults` first if absent.
pub async fn load_or_create<A, C>(db: &C, defaults: A) -> Result<ModelOf<A>, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    ModelOf<A>: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    if let Some(existing) = fetch::<A, C>(db).await? {
        return Ok(existing);
    }

    // another creator may have won in between; its row is just as good
    insert_default(db, defaults).await?;

    fetch::<A, C>(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("singleton row missing after insert".into()))
}

/// Persist `model` as the single row, overwriting every non-key column.
pub async fn save<A, C>(db: &C, model: ModelOf<A>) -> Result<ModelOf<A>, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    ModelOf<A>: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let mut am: A = model.into_active_model();
    pin_primary_key(&mut am);

    let key_names: Vec<String> = <<A::Entity as EntityTrait>::PrimaryKey as Iterable>::iter()
        .map(|pk| Iden::to_string(&pk.into_column()))
        .collect();
    let value_columns: Vec<_> = <<A::Entity as EntityTrait>::Column as Iterable>::iter()
        .filter(|col| !key_names.contains(&Iden::to_string(col)))
        .collect();

    let mut on_conflict = OnConflict::columns(<<A::Entity as EntityTrait>::PrimaryKey as Iterable>::iter());
    on_conflict.update_columns(value_columns);

    <A::Entity as EntityTrait>::insert(am)
        .on_conflict(on_conflict)
        .exec_without_returning(db)
        .await?;

    fetch::<A, C>(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("singleton row missing after save".into()))
}
