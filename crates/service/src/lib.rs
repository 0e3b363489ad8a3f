//! Business operations for the marketing-site API.
//! - Public reads: ordered active listings and page bundles mapped to payloads.
//! - Contact intake and inbox management.
//! - Content administration for every ranked kind plus the singleton records.

pub mod errors;
pub mod media;
pub mod dto;
pub mod listing;
pub mod clients;
pub mod contact;
pub mod hardware;
pub mod home;
pub mod modules;
pub mod singletons;
pub mod content_admin;
#[cfg(test)]
pub mod test_support;
