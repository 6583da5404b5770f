//! In-memory store.
//!
//! Tables are `DashMap`s keyed the way the lookups query them, so every read is a single map
//! access. It's suitable for tests and local demos; data is lost when the process exits.
//!
//! ```ignore
//! let store = InMemoryStore::new();
//! let enrollment = store.create_enrollment(user_id, "Guest");
//! let ticket_type = store.create_ticket_type("In person + hotel", 60000, false, true);
//! store.create_ticket(enrollment.id, &ticket_type, TicketStatus::Paid);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::{EnrollmentStore, HotelStore, SessionStore, TicketStore};
use crate::db::{
    errors::Result,
    models::{
        enrollments::EnrollmentDBResponse,
        hotels::{HotelDBResponse, HotelWithRoomsDBResponse, RoomDBResponse},
        sessions::SessionDBResponse,
        tickets::{TicketDBResponse, TicketTypeDBResponse},
    },
};
use crate::types::{EnrollmentId, HotelId, TicketStatus, UserId};

#[derive(Default)]
struct Tables {
    next_id: AtomicI32,
    sessions: DashMap<String, SessionDBResponse>,
    enrollments: DashMap<UserId, EnrollmentDBResponse>,
    tickets: DashMap<EnrollmentId, TicketDBResponse>,
    hotels: DashMap<HotelId, HotelDBResponse>,
    rooms: DashMap<HotelId, Vec<RoomDBResponse>>,
}

impl Tables {
    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// In-memory implementation of every storage trait. Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_session(&self, user_id: UserId, token: &str) -> SessionDBResponse {
        let session = SessionDBResponse {
            id: self.tables.next_id(),
            user_id,
            token: token.to_string(),
            created_at: Utc::now(),
        };
        self.tables.sessions.insert(token.to_string(), session.clone());
        session
    }

    /// Create the enrollment for a user, replacing any previous one (one enrollment per user)
    pub fn create_enrollment(&self, user_id: UserId, name: &str) -> EnrollmentDBResponse {
        let now = Utc::now();
        let enrollment = EnrollmentDBResponse {
            id: self.tables.next_id(),
            user_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.tables.enrollments.insert(user_id, enrollment.clone());
        enrollment
    }

    pub fn create_ticket_type(&self, name: &str, price: i32, is_remote: bool, includes_hotel: bool) -> TicketTypeDBResponse {
        TicketTypeDBResponse {
            id: self.tables.next_id(),
            name: name.to_string(),
            price,
            is_remote,
            includes_hotel,
        }
    }

    /// Create the ticket for an enrollment, replacing any previous one (one ticket per enrollment)
    pub fn create_ticket(&self, enrollment_id: EnrollmentId, ticket_type: &TicketTypeDBResponse, status: TicketStatus) -> TicketDBResponse {
        let now = Utc::now();
        let ticket = TicketDBResponse {
            id: self.tables.next_id(),
            enrollment_id,
            status,
            ticket_type: ticket_type.clone(),
            created_at: now,
            updated_at: now,
        };
        self.tables.tickets.insert(enrollment_id, ticket.clone());
        ticket
    }

    pub fn create_hotel(&self, name: &str, image: &str, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> HotelDBResponse {
        let hotel = HotelDBResponse {
            id: self.tables.next_id(),
            name: name.to_string(),
            image: image.to_string(),
            created_at,
            updated_at,
        };
        self.tables.hotels.insert(hotel.id, hotel.clone());
        hotel
    }

    pub fn create_room(
        &self,
        hotel_id: HotelId,
        name: &str,
        capacity: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> RoomDBResponse {
        let room = RoomDBResponse {
            id: self.tables.next_id(),
            name: name.to_string(),
            capacity,
            hotel_id,
            created_at,
            updated_at,
        };
        self.tables.rooms.entry(hotel_id).or_default().push(room.clone());
        room
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemoryStore {
    async fn find_session_by_token(&self, token: &str) -> Result<Option<SessionDBResponse>> {
        Ok(self.tables.sessions.get(token).map(|s| s.value().clone()))
    }
}

#[async_trait::async_trait]
impl EnrollmentStore for InMemoryStore {
    async fn find_enrollment_by_user_id(&self, user_id: UserId) -> Result<Option<EnrollmentDBResponse>> {
        Ok(self.tables.enrollments.get(&user_id).map(|e| e.value().clone()))
    }
}

#[async_trait::async_trait]
impl TicketStore for InMemoryStore {
    async fn find_ticket_by_enrollment_id(&self, enrollment_id: EnrollmentId) -> Result<Option<TicketDBResponse>> {
        Ok(self.tables.tickets.get(&enrollment_id).map(|t| t.value().clone()))
    }
}

#[async_trait::async_trait]
impl HotelStore for InMemoryStore {
    async fn list_hotels(&self) -> Result<Vec<HotelDBResponse>> {
        let mut hotels: Vec<HotelDBResponse> = self.tables.hotels.iter().map(|h| h.value().clone()).collect();
        hotels.sort_by_key(|h| h.id);
        Ok(hotels)
    }

    async fn find_hotel_with_rooms(&self, id: HotelId) -> Result<Option<HotelWithRoomsDBResponse>> {
        // Clone the hotel out before touching the rooms map so no shard guard is held across both
        let Some(hotel) = self.tables.hotels.get(&id).map(|h| h.value().clone()) else {
            return Ok(None);
        };
        let mut rooms = self.tables.rooms.get(&id).map(|r| r.value().clone()).unwrap_or_default();
        rooms.sort_by_key(|r| r.id);

        Ok(Some(HotelWithRoomsDBResponse { hotel, rooms }))
    }
}
