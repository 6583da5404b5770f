//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut PgConnection` (from a pool or a transaction) and exposes the
//! read queries for one table. None of them write: enrollments, tickets and hotels are owned by
//! other parts of the platform.
//!
//! - [`Sessions`]: bearer session lookup
//! - [`Enrollments`]: enrollment by user
//! - [`Tickets`]: ticket (with ticket type) by enrollment
//! - [`Hotels`]: hotel listing and hotel-with-rooms lookup
//!
//! ```ignore
//! use hotelctl::db::handlers::Hotels;
//!
//! let mut conn = pool.acquire().await?;
//! let mut repo = Hotels::new(&mut conn);
//! let hotels = repo.list().await?;
//! ```

pub mod enrollments;
pub mod hotels;
pub mod sessions;
pub mod tickets;

pub use enrollments::Enrollments;
pub use hotels::Hotels;
pub use sessions::Sessions;
pub use tickets::Tickets;
