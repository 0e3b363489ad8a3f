//! Public response payloads and the mapping from stored records.
//!
//! Optional media fields serialize as `null` when unset; they are never omitted.

use models::{
    app_feature, award, category, certification, client, contact_info, contact_message, device, distributor_info, hardware_feature,
    hero_section, module, office_address, stat, testimonial, why_choose_feature,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::media::MediaUrls;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryOut {
    pub id: i32,
    pub name: String,
}

impl From<category::Model> for CategoryOut {
    fn from(m: category::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClientOut {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub category_id: Option<i32>,
}

impl ClientOut {
    pub fn from_model(m: client::Model, media: &MediaUrls) -> Self {
        Self { id: m.id, logo: media.url(m.logo.as_deref()), name: m.name, category_id: m.category_id }
    }
}

/// Client entry in the home page logo strip.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ClientLogoOut {
    pub name: String,
    pub logo: Option<String>,
}

impl ClientLogoOut {
    pub fn from_model(m: client::Model, media: &MediaUrls) -> Self {
        Self { logo: media.url(m.logo.as_deref()), name: m.name }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactInfoOut {
    pub address_line1: String,
    pub address_line2: String,
    pub city_state_zip: String,
    pub sales_phone: String,
    pub support_phone: String,
    pub info_email: String,
    pub support_email: String,
    pub hours_weekday: String,
    pub hours_saturday: String,
    pub hours_sunday: String,
    pub map_embed_url: String,
}

impl From<contact_info::Model> for ContactInfoOut {
    fn from(m: contact_info::Model) -> Self {
        Self {
            address_line1: m.address_line1,
            address_line2: m.address_line2,
            city_state_zip: m.city_state_zip,
            sales_phone: m.sales_phone,
            support_phone: m.support_phone,
            info_email: m.info_email,
            support_email: m.support_email,
            hours_weekday: m.hours_weekday,
            hours_saturday: m.hours_saturday,
            hours_sunday: m.hours_sunday,
            map_embed_url: m.map_embed_url,
        }
    }
}

/// Body of `POST /api/contact-message/`. Every field may be missing on the
/// wire; presence is checked by validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactMessageIn {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl From<ContactMessageIn> for contact_message::NewContactMessage {
    fn from(m: ContactMessageIn) -> Self {
        Self { name: m.name, email: m.email, subject: m.subject, message: m.message }
    }
}

/// Acknowledgement for an accepted contact message.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

impl ContactAck {
    pub fn sent() -> Self {
        Self { success: true, message: "Message sent successfully".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HardwareFeatureOut {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

impl From<hardware_feature::Model> for HardwareFeatureOut {
    fn from(m: hardware_feature::Model) -> Self {
        Self { icon: m.icon, title: m.title, desc: m.description }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DeviceOut {
    pub name: String,
    pub tagline: String,
    pub image: Option<String>,
    pub specs: Vec<String>,
    pub icon: String,
}

impl DeviceOut {
    pub fn from_model(m: device::Model, media: &MediaUrls) -> Self {
        Self {
            specs: m.specs_list(),
            image: media.url(m.image.as_deref()),
            name: m.name,
            tagline: m.tagline,
            icon: m.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DistributorOut {
    pub heading: String,
    pub description: String,
    pub button_text: String,
    pub button_link: String,
}

impl From<distributor_info::Model> for DistributorOut {
    fn from(m: distributor_info::Model) -> Self {
        Self { heading: m.heading, description: m.description, button_text: m.button_text, button_link: m.button_link }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OfficeOut {
    pub location_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city_state_zip: String,
}

impl From<office_address::Model> for OfficeOut {
    fn from(m: office_address::Model) -> Self {
        Self {
            location_name: m.location_name,
            address_line1: m.address_line1,
            address_line2: m.address_line2,
            city_state_zip: m.city_state_zip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HardwareBundle {
    pub features: Vec<HardwareFeatureOut>,
    pub devices: Vec<DeviceOut>,
    pub distributor: DistributorOut,
    pub offices: Vec<OfficeOut>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HeroOut {
    pub heading: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    pub background_image: Option<String>,
}

impl HeroOut {
    pub fn from_model(m: hero_section::Model, media: &MediaUrls) -> Self {
        Self {
            background_image: media.url(m.background_image.as_deref()),
            heading: m.heading,
            description: m.description,
            primary_button_text: m.primary_button_text,
            primary_button_link: m.primary_button_link,
            secondary_button_text: m.secondary_button_text,
            secondary_button_link: m.secondary_button_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatOut {
    pub value: String,
    pub label: String,
}

impl From<stat::Model> for StatOut {
    fn from(m: stat::Model) -> Self {
        Self { value: m.value, label: m.label }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TestimonialOut {
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
    pub author_image: Option<String>,
}

impl TestimonialOut {
    pub fn from_model(m: testimonial::Model, media: &MediaUrls) -> Self {
        Self {
            author_image: media.url(m.author_image.as_deref()),
            quote: m.quote,
            author_name: m.author_name,
            author_title: m.author_title,
        }
    }
}

/// Certification or award badge.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BadgeOut {
    pub name: String,
    pub image: Option<String>,
}

impl BadgeOut {
    pub fn certification(m: certification::Model, media: &MediaUrls) -> Self {
        Self { image: media.url(Some(&m.image)), name: m.name }
    }

    pub fn award(m: award::Model, media: &MediaUrls) -> Self {
        Self { image: media.url(Some(&m.image)), name: m.name }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomeBundle {
    pub hero: HeroOut,
    pub why_choose_features: Vec<String>,
    pub app_features: Vec<String>,
    pub stats: Vec<StatOut>,
    pub testimonials: Vec<TestimonialOut>,
    pub certifications: Vec<BadgeOut>,
    pub awards: Vec<BadgeOut>,
    pub clients: Vec<ClientLogoOut>,
}

pub fn why_choose_title(m: why_choose_feature::Model) -> String {
    m.title
}

pub fn app_feature_text(m: app_feature::Model) -> String {
    m.description
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ModuleOut {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub hero_heading: String,
    pub hero_description: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub order: i32,
}

impl ModuleOut {
    pub fn from_model(m: module::Model, media: &MediaUrls) -> Self {
        Self {
            featured_image: media.url(m.featured_image.as_deref()),
            id: m.id,
            name: m.name,
            slug: m.slug,
            hero_heading: m.hero_heading,
            hero_description: m.hero_description,
            content: m.content,
            order: m.order,
        }
    }
}
