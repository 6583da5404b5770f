//! Database models for hotels and rooms.

use crate::types::{HotelId, RoomId};
use chrono::{DateTime, Utc};

/// Database response for a hotel row
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct HotelDBResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database response for a room row
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RoomDBResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hotel together with all of its rooms
#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRoomsDBResponse {
    pub hotel: HotelDBResponse,
    pub rooms: Vec<RoomDBResponse>,
}
