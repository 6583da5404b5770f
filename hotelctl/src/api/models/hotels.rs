//! API response models for hotels and rooms.
//!
//! Field names are camelCase to match the rest of the platform's API, and the room list of a
//! single hotel is serialized under `Rooms`. Timestamps are rendered here, and only here, as
//! ISO-8601 strings in UTC with millisecond precision (`2024-03-01T12:00:00.000Z`).

use crate::db::models::hotels::{HotelDBResponse, HotelWithRoomsDBResponse, RoomDBResponse};
use crate::types::{HotelId, RoomId};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Render a timestamp the way API clients expect it
pub fn to_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Hotel summary, as returned by the hotel listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: HotelId,
    pub name: String,
    /// Image URL
    pub image: String,
    #[schema(example = "2024-03-01T12:00:00.000Z")]
    pub created_at: String,
    #[schema(example = "2024-03-01T12:00:00.000Z")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: String,
    pub updated_at: String,
}

/// A single hotel with its rooms. `Rooms` is always present, empty when the hotel has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsResponse {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelDBResponse> for HotelResponse {
    fn from(db: HotelDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            image: db.image,
            created_at: to_iso8601(&db.created_at),
            updated_at: to_iso8601(&db.updated_at),
        }
    }
}

impl From<RoomDBResponse> for RoomResponse {
    fn from(db: RoomDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            capacity: db.capacity,
            hotel_id: db.hotel_id,
            created_at: to_iso8601(&db.created_at),
            updated_at: to_iso8601(&db.updated_at),
        }
    }
}

impl From<HotelWithRoomsDBResponse> for HotelWithRoomsResponse {
    fn from(db: HotelWithRoomsDBResponse) -> Self {
        let HotelWithRoomsDBResponse { hotel, rooms } = db;
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: to_iso8601(&hotel.created_at),
            updated_at: to_iso8601(&hotel.updated_at),
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
