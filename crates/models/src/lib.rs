//! Persisted content entities for the marketing site.
//!
//! One module per table. Ranked entities implement [`content::Ranked`] and
//! expose an [`content::Editable`] input; single-row configuration tables go
//! through [`singleton`].

pub mod errors;
pub mod db;
pub mod content;
pub mod singleton;

pub mod category;
pub mod client;
pub mod contact_info;
pub mod contact_message;
pub mod hardware_feature;
pub mod device;
pub mod distributor_info;
pub mod office_address;
pub mod hero_section;
pub mod why_choose_feature;
pub mod app_feature;
pub mod stat;
pub mod testimonial;
pub mod certification;
pub mod award;
pub mod module;

#[cfg(test)]
mod tests;
