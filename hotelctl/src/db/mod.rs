//! Database layer for data persistence and access.
//!
//! ```text
//! ┌─────────────┐
//! │  Services   │  (eligibility chain, DTO shaping)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Stores    │  (db::store - trait per collaborator, PostgreSQL or in-memory)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - one per table, over a PgConnection)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations (read queries)
//! - [`models`]: Database record structures matching table schemas
//! - [`store`]: Storage traits and their PostgreSQL / in-memory implementations
//! - [`errors`]: Database-specific error types
//!
//! # Migrations
//!
//! Migrations live in `migrations/` and are embedded at compile time. [`crate::migrator`] runs
//! them on startup unless `database.run_migrations` is disabled.

pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
