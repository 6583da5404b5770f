use crate::db::{
    errors::Result,
    models::tickets::{TicketDBResponse, TicketTypeDBResponse},
};
use crate::types::{EnrollmentId, TicketId, TicketStatus, TicketTypeId};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use tracing::instrument;

// Flat row of the tickets/ticket_types join
#[derive(Debug, FromRow)]
struct TicketWithType {
    id: TicketId,
    enrollment_id: EnrollmentId,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    ticket_type_id: TicketTypeId,
    ticket_type_name: String,
    ticket_type_price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl From<TicketWithType> for TicketDBResponse {
    fn from(row: TicketWithType) -> Self {
        Self {
            id: row.id,
            enrollment_id: row.enrollment_id,
            status: row.status,
            ticket_type: TicketTypeDBResponse {
                id: row.ticket_type_id,
                name: row.ticket_type_name,
                price: row.ticket_type_price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct Tickets<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Tickets<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Get the ticket bought under an enrollment, with its ticket type
    #[instrument(skip(self), err)]
    pub async fn get_by_enrollment_id(&mut self, enrollment_id: EnrollmentId) -> Result<Option<TicketDBResponse>> {
        let row = sqlx::query_as::<_, TicketWithType>(
            r#"
            SELECT
                t.id,
                t.enrollment_id,
                t.status,
                t.created_at,
                t.updated_at,
                tt.id AS ticket_type_id,
                tt.name AS ticket_type_name,
                tt.price AS ticket_type_price,
                tt.is_remote,
                tt.includes_hotel
            FROM tickets t
            INNER JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(row.map(TicketDBResponse::from))
    }
}
