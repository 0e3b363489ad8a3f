use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use super::setup_test_db;
use crate::content::{active_ordered, all_ordered, Editable};
use crate::errors::ModelError;
use crate::{category, client, contact_message, stat};

async fn insert<I: Editable>(db: &sea_orm::DatabaseConnection, input: I) -> Result<()>
where
    <I::Entity as sea_orm::EntityTrait>::Model: sea_orm::IntoActiveModel<I::ActiveModel>,
{
    input.validate()?;
    let mut am = <I::ActiveModel as ActiveModelTrait>::default();
    input.apply(&mut am);
    am.insert(db).await?;
    Ok(())
}

fn stat_input(value: &str, label: &str, order: i32, is_active: bool) -> stat::StatInput {
    stat::StatInput { value: value.into(), label: label.into(), order, is_active }
}

#[tokio::test]
async fn test_active_listing_order_and_filter() -> Result<()> {
    let db = setup_test_db().await?;
    insert(&db, stat_input("24/7", "Support", 2, true)).await?;
    insert(&db, stat_input("500+", "Clients", 1, true)).await?;
    insert(&db, stat_input("10", "Hidden", 0, false)).await?;
    insert(&db, stat_input("15", "Years", 1, true)).await?;

    let labels: Vec<String> = active_ordered::<stat::Entity>()
        .all(&db)
        .await?
        .into_iter()
        .map(|s| s.label)
        .collect();
    // equal ranks fall back to insertion id
    assert_eq!(labels, vec!["Clients", "Years", "Support"]);

    let all = all_ordered::<stat::Entity>().all(&db).await?;
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].label, "Hidden");
    Ok(())
}

#[tokio::test]
async fn test_name_breaks_rank_ties() -> Result<()> {
    let db = setup_test_db().await?;
    for name in ["Zeta Corp", "Alpha Bank", "Mid Mills"] {
        insert(
            &db,
            client::ClientInput { name: name.into(), logo: None, category_id: None, order: 0, is_active: true },
        )
        .await?;
    }
    let names: Vec<String> = active_ordered::<client::Entity>()
        .all(&db)
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Alpha Bank", "Mid Mills", "Zeta Corp"]);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_category_is_validation_error() -> Result<()> {
    let db = setup_test_db().await?;
    insert(&db, category::CategoryInput { name: "Banking".into(), order: 0, is_active: true }).await?;

    let mut am = <category::ActiveModel as ActiveModelTrait>::default();
    category::CategoryInput { name: "Banking".into(), order: 1, is_active: true }.apply(&mut am);
    let err = ModelError::from(am.insert(&db).await.unwrap_err());
    assert!(matches!(err, ModelError::Validation(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_category_delete_nulls_client_reference() -> Result<()> {
    let db = setup_test_db().await?;
    insert(&db, category::CategoryInput { name: "Retail".into(), order: 0, is_active: true }).await?;
    let cat = category::Entity::find().one(&db).await?.expect("category");
    insert(
        &db,
        client::ClientInput { name: "Shop".into(), logo: None, category_id: Some(cat.id), order: 0, is_active: true },
    )
    .await?;

    category::Entity::delete_by_id(cat.id).exec(&db).await?;
    let shop = client::Entity::find().filter(client::Column::Name.eq("Shop")).one(&db).await?.expect("client");
    assert_eq!(shop.category_id, None);
    Ok(())
}

#[tokio::test]
async fn test_contact_message_defaults() -> Result<()> {
    let db = setup_test_db().await?;
    let valid = contact_message::NewContactMessage {
        name: Some("Ali".into()),
        email: Some("ali@example.com".into()),
        subject: Some("Demo".into()),
        message: Some("Please call me".into()),
    }
    .validate()?;
    let saved = contact_message::create(&db, valid).await?;
    assert!(!saved.is_read);
    assert!(saved.id > 0);

    let inbox = contact_message::inbox().all(&db).await?;
    assert_eq!(inbox.len(), 1);
    Ok(())
}

#[test]
fn test_contact_message_requires_every_field() {
    let blank = contact_message::NewContactMessage {
        name: Some("Ali".into()),
        email: Some("ali@example.com".into()),
        subject: Some("   ".into()),
        message: Some("hi".into()),
    };
    match blank.validate() {
        Err(ModelError::Validation(msg)) => assert_eq!(msg, contact_message::ALL_FIELDS_REQUIRED),
        other => panic!("unexpected {other:?}"),
    }

    let missing = contact_message::NewContactMessage { name: Some("Ali".into()), ..Default::default() };
    assert!(missing.validate().is_err());

    let long_name = contact_message::NewContactMessage {
        name: Some("x".repeat(201)),
        email: Some("a@b.c".into()),
        subject: Some("s".into()),
        message: Some("m".into()),
    };
    assert!(matches!(long_name.validate(), Err(ModelError::Validation(_))));
}
