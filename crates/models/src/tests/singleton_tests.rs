use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::setup_test_db;
use crate::singleton::{insert_default, SINGLETON_ID};
use crate::{contact_info, distributor_info, hero_section};

#[tokio::test]
async fn test_load_creates_defaults_once() -> Result<()> {
    let db = setup_test_db().await?;

    let first = contact_info::load(&db).await?;
    assert_eq!(first.id, SINGLETON_ID);
    assert_eq!(first.hours_weekday, "9:00 AM - 6:00 PM");
    assert_eq!(first.hours_saturday, "10:00 AM - 2:00 PM");
    assert_eq!(first.hours_sunday, "Closed");
    assert_eq!(first.sales_phone, "");

    let second = contact_info::load(&db).await?;
    assert_eq!(first, second);
    assert_eq!(contact_info::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_loads_yield_one_row() -> Result<()> {
    let db = setup_test_db().await?;
    let (a, b, c) = tokio::join!(hero_section::load(&db), hero_section::load(&db), hero_section::load(&db));
    assert_eq!(a?.id, SINGLETON_ID);
    assert_eq!(b?.id, SINGLETON_ID);
    assert_eq!(c?.id, SINGLETON_ID);
    assert_eq!(hero_section::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_insert_default_yields_to_existing_row() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(insert_default(&db, contact_info::defaults()).await?);

    let mut info = contact_info::load(&db).await?;
    info.sales_phone = "+92 21 111 000 111".into();
    contact_info::save(&db, info).await?;

    // a creator that lost the race hits the conflict path and changes nothing
    assert!(!insert_default(&db, contact_info::defaults()).await?);
    assert!(!insert_default(&db, contact_info::defaults()).await?);

    assert_eq!(contact_info::Entity::find().count(&db).await?, 1);
    assert_eq!(contact_info::load(&db).await?.sales_phone, "+92 21 111 000 111");
    Ok(())
}

#[tokio::test]
async fn test_save_overwrites_fixed_row() -> Result<()> {
    let db = setup_test_db().await?;
    let mut info = distributor_info::load(&db).await?;
    assert_eq!(info.heading, "Sole Distributor of ZK biometric devices in Pakistan");
    assert_eq!(info.button_link, "/contact");

    info.description = "Bulk pricing available".into();
    // a stray id is pinned back to the singleton key
    info.id = 42;
    let saved = distributor_info::save(&db, info).await?;
    assert_eq!(saved.id, SINGLETON_ID);
    assert_eq!(saved.description, "Bulk pricing available");

    assert_eq!(distributor_info::Entity::find().count(&db).await?, 1);
    assert_eq!(distributor_info::load(&db).await?.description, "Bulk pricing available");
    Ok(())
}

#[tokio::test]
async fn test_partial_update_keeps_absent_fields() -> Result<()> {
    let db = setup_test_db().await?;
    let mut hero = hero_section::load(&db).await?;
    let update: hero_section::HeroSectionUpdate =
        serde_json::from_str(r#"{"heading": "Smart HR", "background_image": "hero/bg.jpg"}"#)?;
    update.validate()?;
    update.apply(&mut hero);
    let saved = hero_section::save(&db, hero).await?;

    assert_eq!(saved.heading, "Smart HR");
    assert_eq!(saved.background_image.as_deref(), Some("hero/bg.jpg"));
    assert_eq!(saved.primary_button_text, "Request a Demo");
    assert_eq!(saved.secondary_button_link, "/modules");

    let mut hero = saved;
    let clear: hero_section::HeroSectionUpdate = serde_json::from_str(r#"{"background_image": ""}"#)?;
    clear.apply(&mut hero);
    let saved = hero_section::save(&db, hero).await?;
    assert_eq!(saved.background_image, None);
    assert_eq!(saved.heading, "Smart HR");
    Ok(())
}
