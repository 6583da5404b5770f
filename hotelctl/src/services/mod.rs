//! Business logic sitting between the HTTP handlers and the storage layer.
//!
//! Services take an `Arc<dyn Storage>` so the same code runs against PostgreSQL in production and
//! the in-memory store in tests.

pub mod hotels;

pub use hotels::HotelService;
