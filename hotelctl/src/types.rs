//! Common type definitions.
//!
//! All entity IDs are PostgreSQL `SERIAL` integers, wrapped in type aliases so
//! signatures say which table an ID belongs to:
//!
//! - [`UserId`]: platform user account
//! - [`EnrollmentId`]: a user's event enrollment
//! - [`TicketId`] / [`TicketTypeId`]: purchased ticket and its category
//! - [`HotelId`] / [`RoomId`]: lodging inventory

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Type aliases for IDs
pub type UserId = i32;
pub type SessionId = i32;
pub type EnrollmentId = i32;
pub type TicketId = i32;
pub type TicketTypeId = i32;
pub type HotelId = i32;
pub type RoomId = i32;

/// Payment state of a ticket, stored as the `ticket_status` enum in PostgreSQL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    /// Ticket held but not paid for yet
    Reserved,
    Paid,
}
