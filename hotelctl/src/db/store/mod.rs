//! Storage traits consumed by the service and auth layers.
//!
//! Each collaborator the hotel flow depends on gets its own narrow trait, so tests can see exactly
//! which lookups an operation performs. [`Storage`] bundles them for [`crate::AppState`].
//!
//! Two implementations are provided:
//! - [`PgStore`]: PostgreSQL, delegating to the repositories in [`crate::db::handlers`]
//! - [`InMemoryStore`]: `DashMap` tables, used by tests and local fixtures

use crate::db::{
    errors::Result,
    models::{
        enrollments::EnrollmentDBResponse,
        hotels::{HotelDBResponse, HotelWithRoomsDBResponse},
        sessions::SessionDBResponse,
        tickets::TicketDBResponse,
    },
};
use crate::types::{EnrollmentId, HotelId, UserId};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryStore;
pub use postgres::PgStore;

/// Lookup of issued bearer sessions
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_session_by_token(&self, token: &str) -> Result<Option<SessionDBResponse>>;
}

/// Lookup of a user's event enrollment
#[async_trait::async_trait]
pub trait EnrollmentStore: Send + Sync {
    async fn find_enrollment_by_user_id(&self, user_id: UserId) -> Result<Option<EnrollmentDBResponse>>;
}

/// Lookup of the ticket bought under an enrollment. The ticket type is always embedded.
#[async_trait::async_trait]
pub trait TicketStore: Send + Sync {
    async fn find_ticket_by_enrollment_id(&self, enrollment_id: EnrollmentId) -> Result<Option<TicketDBResponse>>;
}

/// Read-only access to hotels and rooms
#[async_trait::async_trait]
pub trait HotelStore: Send + Sync {
    /// Every hotel, ordered by ID, without rooms. No filtering or pagination.
    async fn list_hotels(&self) -> Result<Vec<HotelDBResponse>>;

    /// A single hotel with all of its rooms (ordered by ID), or `None` if there is no such hotel
    async fn find_hotel_with_rooms(&self, id: HotelId) -> Result<Option<HotelWithRoomsDBResponse>>;
}

/// Everything the application needs from a storage backend
pub trait Storage: SessionStore + EnrollmentStore + TicketStore + HotelStore {}

impl<T> Storage for T where T: SessionStore + EnrollmentStore + TicketStore + HotelStore {}
