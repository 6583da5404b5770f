//! Hotel access for ticket holders.
//!
//! Hotels are only visible to users whose ticket pays for them. Every request re-runs the chain:
//!
//! 1. the user has an enrollment, otherwise `NotFound`
//! 2. the enrollment has a ticket, otherwise `NotFound`
//! 3. the ticket is paid, in person and includes a hotel, otherwise `PaymentRequired`
//!
//! and only then reads hotels from storage.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::api::models::hotels::{HotelResponse, HotelWithRoomsResponse};
use crate::db::{
    models::tickets::TicketDBResponse,
    store::{EnrollmentStore, HotelStore, Storage, TicketStore},
};
use crate::errors::{Error, Result};
use crate::types::{HotelId, UserId};

#[derive(Clone)]
pub struct HotelService {
    store: Arc<dyn Storage>,
}

impl HotelService {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    /// Resolve the user's ticket and check that it grants hotel access.
    ///
    /// Returns the ticket on success so callers can log or inspect it.
    #[instrument(skip(self), err)]
    pub async fn ensure_eligible(&self, user_id: UserId) -> Result<TicketDBResponse> {
        let enrollment = self
            .store
            .find_enrollment_by_user_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found("No enrollment found for user"))?;

        let ticket = self
            .store
            .find_ticket_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| Error::not_found("No ticket found for enrollment"))?;

        if !ticket.grants_hotel_access() {
            debug!(
                ticket_id = ticket.id,
                status = ?ticket.status,
                is_remote = ticket.ticket_type.is_remote,
                includes_hotel = ticket.ticket_type.includes_hotel,
                "Ticket does not grant hotel access"
            );
            return Err(Error::payment_required());
        }

        Ok(ticket)
    }

    /// All hotels, for an eligible user. An empty catalogue is reported as `NotFound`.
    #[instrument(skip(self), err)]
    pub async fn list_hotels(&self, user_id: UserId) -> Result<Vec<HotelResponse>> {
        self.ensure_eligible(user_id).await?;

        let hotels = self.store.list_hotels().await?;
        if hotels.is_empty() {
            return Err(Error::not_found("No hotels found"));
        }

        Ok(hotels.into_iter().map(HotelResponse::from).collect())
    }

    /// One hotel and its rooms, for an eligible user.
    ///
    /// The full listing is not fetched here: with no hotels stored the lookup below is `NotFound`
    /// anyway, so the outcome matches [`Self::list_hotels`] without the extra query.
    #[instrument(skip(self), err)]
    pub async fn get_hotel_with_rooms(&self, user_id: UserId, hotel_id: HotelId) -> Result<HotelWithRoomsResponse> {
        self.ensure_eligible(user_id).await?;

        let hotel = self
            .store
            .find_hotel_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("Hotel {hotel_id} not found")))?;

        Ok(hotel.into())
    }
}
