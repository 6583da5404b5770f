//! Database models for tickets and ticket types.

use crate::types::{EnrollmentId, TicketId, TicketStatus, TicketTypeId};
use chrono::{DateTime, Utc};

/// Database response for a ticket type
#[derive(Debug, Clone, PartialEq)]
pub struct TicketTypeDBResponse {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in cents
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

/// Database response for a ticket, with its ticket type embedded
#[derive(Debug, Clone)]
pub struct TicketDBResponse {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketTypeDBResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TicketDBResponse {
    /// Whether this ticket lets its holder see lodging: it has to be paid for, for an in-person
    /// ticket type that bundles a hotel.
    pub fn grants_hotel_access(&self) -> bool {
        self.status == TicketStatus::Paid && !self.ticket_type.is_remote && self.ticket_type.includes_hotel
    }
}
