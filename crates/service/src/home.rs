use models::{app_feature, award, certification, hero_section, stat, testimonial, why_choose_feature};
use sea_orm::ConnectionTrait;
use tracing::instrument;

use crate::clients::sample_clients;
use crate::dto::{self, BadgeOut, HeroOut, HomeBundle, StatOut, TestimonialOut};
use crate::errors::ServiceError;
use crate::listing;
use crate::media::MediaUrls;

/// Upper bound on the random client logos shown on the home page.
pub const HOME_CLIENT_SAMPLE: usize = 6;

/// Everything the home page renders in one payload.
#[instrument(skip_all)]
pub async fn home_bundle<C: ConnectionTrait>(db: &C, media: &MediaUrls) -> Result<HomeBundle, ServiceError> {
    let hero = HeroOut::from_model(hero_section::load(db).await?, media);
    let why_choose_features = listing::active::<why_choose_feature::Entity, _, _, _>(db, dto::why_choose_title).await?;
    let app_features = listing::active::<app_feature::Entity, _, _, _>(db, dto::app_feature_text).await?;
    let stats = listing::active::<stat::Entity, _, _, _>(db, StatOut::from).await?;
    let testimonials =
        listing::active::<testimonial::Entity, _, _, _>(db, |m| TestimonialOut::from_model(m, media)).await?;
    let certifications =
        listing::active::<certification::Entity, _, _, _>(db, |m| BadgeOut::certification(m, media)).await?;
    let awards = listing::active::<award::Entity, _, _, _>(db, |m| BadgeOut::award(m, media)).await?;
    let clients = sample_clients(db, media, HOME_CLIENT_SAMPLE).await?;
    Ok(HomeBundle { hero, why_choose_features, app_features, stats, testimonials, certifications, awards, clients })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_admin::{self, ContentKind};
    use crate::test_support::{get_db, media};
    use serde_json::json;

    #[tokio::test]
    async fn empty_store_yields_default_hero() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let bundle = home_bundle(&db, &media()).await?;
        assert_eq!(bundle.hero.primary_button_text, "Request a Demo");
        assert_eq!(bundle.hero.background_image, None);
        assert!(bundle.stats.is_empty());
        assert!(bundle.clients.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn strips_are_flattened_and_ordered() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        content_admin::create(&db, ContentKind::WhyChooseFeatures, json!({"title": "Local support", "order": 2})).await?;
        content_admin::create(&db, ContentKind::WhyChooseFeatures, json!({"title": "Cloud ready", "order": 1})).await?;
        content_admin::create(&db, ContentKind::AppFeatures, json!({"description": "Geo-fenced attendance"})).await?;
        content_admin::create(&db, ContentKind::AppFeatures, json!({"description": "Hidden", "is_active": false})).await?;
        content_admin::create(&db, ContentKind::Stats, json!({"value": "500+", "label": "Clients"})).await?;
        content_admin::create(&db, ContentKind::Testimonials, json!({"quote": "Great", "author_name": "Hina"})).await?;
        content_admin::create(&db, ContentKind::Certifications, json!({"name": "ISO 9001", "image": "badges/iso.png"})).await?;
        content_admin::create(&db, ContentKind::Awards, json!({"name": "Best HR", "image": "https://cdn.example.com/a.png"})).await?;
        for i in 0..8 {
            content_admin::create(&db, ContentKind::Clients, json!({"name": format!("C{i}")})).await?;
        }

        let bundle = home_bundle(&db, &media()).await?;
        assert_eq!(bundle.why_choose_features, vec!["Cloud ready", "Local support"]);
        assert_eq!(bundle.app_features, vec!["Geo-fenced attendance"]);
        assert_eq!(bundle.stats, vec![StatOut { value: "500+".into(), label: "Clients".into() }]);
        assert_eq!(bundle.testimonials[0].author_image, None);
        assert_eq!(bundle.certifications[0].image.as_deref(), Some("/media/badges/iso.png"));
        assert_eq!(bundle.awards[0].image.as_deref(), Some("https://cdn.example.com/a.png"));
        assert_eq!(bundle.clients.len(), HOME_CLIENT_SAMPLE);
        Ok(())
    }
}
