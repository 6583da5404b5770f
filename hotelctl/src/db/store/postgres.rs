//! PostgreSQL-backed store.

use sqlx::PgPool;

use super::{EnrollmentStore, HotelStore, SessionStore, TicketStore};
use crate::db::{
    errors::Result,
    handlers::{Enrollments, Hotels, Sessions, Tickets},
    models::{
        enrollments::EnrollmentDBResponse,
        hotels::{HotelDBResponse, HotelWithRoomsDBResponse},
        sessions::SessionDBResponse,
        tickets::TicketDBResponse,
    },
};
use crate::types::{EnrollmentId, HotelId, UserId};

/// Store that acquires a pooled connection per lookup and runs the matching repository query.
///
/// Lookups are independent reads, so no transaction is opened.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SessionStore for PgStore {
    async fn find_session_by_token(&self, token: &str) -> Result<Option<SessionDBResponse>> {
        let mut conn = self.pool.acquire().await?;
        Sessions::new(&mut conn).get_by_token(token).await
    }
}

#[async_trait::async_trait]
impl EnrollmentStore for PgStore {
    async fn find_enrollment_by_user_id(&self, user_id: UserId) -> Result<Option<EnrollmentDBResponse>> {
        let mut conn = self.pool.acquire().await?;
        Enrollments::new(&mut conn).get_by_user_id(user_id).await
    }
}

#[async_trait::async_trait]
impl TicketStore for PgStore {
    async fn find_ticket_by_enrollment_id(&self, enrollment_id: EnrollmentId) -> Result<Option<TicketDBResponse>> {
        let mut conn = self.pool.acquire().await?;
        Tickets::new(&mut conn).get_by_enrollment_id(enrollment_id).await
    }
}

#[async_trait::async_trait]
impl HotelStore for PgStore {
    async fn list_hotels(&self) -> Result<Vec<HotelDBResponse>> {
        let mut conn = self.pool.acquire().await?;
        Hotels::new(&mut conn).list().await
    }

    async fn find_hotel_with_rooms(&self, id: HotelId) -> Result<Option<HotelWithRoomsDBResponse>> {
        let mut conn = self.pool.acquire().await?;
        Hotels::new(&mut conn).get_with_rooms(id).await
    }
}
