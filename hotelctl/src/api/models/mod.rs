//! API request and response data models.
//!
//! API models are distinct from the database records in [`crate::db::models`] so the wire
//! format can evolve independently of the schema. All response models derive `utoipa::ToSchema`
//! for the OpenAPI document.
//!
//! - [`hotels`]: hotel summaries, hotel-with-rooms and room responses
//! - [`users`]: the authenticated caller

pub mod hotels;
pub mod users;
