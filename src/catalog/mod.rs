//! Static catalogs — destinations, partners, and quiz entries.
//!
//! All catalog data is immutable after load and shared read-only across
//! sessions; no locking is required.

pub mod partners;
pub mod places;
pub mod quiz;

pub use partners::{PartnerSet, format_partner_block, partners_for};
pub use places::{DestinationProfile, by_name};
pub use quiz::{QuizEntry, quiz_for_place};
