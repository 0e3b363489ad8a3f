//! One ordered-active listing operation shared by every public list.

use models::content::{active_ordered, Ranked};
use sea_orm::{ConnectionTrait, Select};

use crate::errors::ServiceError;

/// Active rows of `E` in display order, each mapped through `serialize`.
pub async fn active<E, T, C, F>(db: &C, serialize: F) -> Result<Vec<T>, ServiceError>
where
    E: Ranked,
    C: ConnectionTrait,
    F: FnMut(E::Model) -> T,
{
    active_filtered(db, |select: Select<E>| select, serialize).await
}

/// Like [`active`], with an extra narrowing step such as a parent filter.
pub async fn active_filtered<E, T, C, N, F>(db: &C, narrow: N, serialize: F) -> Result<Vec<T>, ServiceError>
where
    E: Ranked,
    C: ConnectionTrait,
    N: FnOnce(Select<E>) -> Select<E>,
    F: FnMut(E::Model) -> T,
{
    let rows = narrow(active_ordered::<E>()).all(db).await?;
    Ok(rows.into_iter().map(serialize).collect())
}
