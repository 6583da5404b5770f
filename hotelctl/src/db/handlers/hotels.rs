use crate::db::{
    errors::Result,
    models::hotels::{HotelDBResponse, HotelWithRoomsDBResponse, RoomDBResponse},
};
use crate::types::HotelId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Hotels<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Hotels<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// List every hotel, without rooms
    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<HotelDBResponse>> {
        let hotels = sqlx::query_as::<_, HotelDBResponse>("SELECT id, name, image, created_at, updated_at FROM hotels ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(hotels)
    }

    /// Get a hotel by ID with all of its rooms
    #[instrument(skip(self), err)]
    pub async fn get_with_rooms(&mut self, id: HotelId) -> Result<Option<HotelWithRoomsDBResponse>> {
        let Some(hotel) =
            sqlx::query_as::<_, HotelDBResponse>("SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.db)
                .await?
        else {
            return Ok(None);
        };

        let rooms = sqlx::query_as::<_, RoomDBResponse>(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(Some(HotelWithRoomsDBResponse { hotel, rooms }))
    }
}
