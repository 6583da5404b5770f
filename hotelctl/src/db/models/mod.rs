//! Database record models matching table schemas.
//!
//! These are the records the store layer hands to the service layer. They carry raw
//! `DateTime<Utc>` timestamps; ISO-8601 rendering only happens when API models in
//! [`crate::api::models`] are built from them.
//!
//! - [`sessions`]: issued bearer tokens that are still valid
//! - [`enrollments`]: a user's event enrollment
//! - [`tickets`]: purchased tickets with their embedded ticket type
//! - [`hotels`]: hotels and their rooms

pub mod enrollments;
pub mod hotels;
pub mod sessions;
pub mod tickets;
