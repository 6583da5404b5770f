//! Hotel listing and hotel detail endpoints.

use crate::{
    AppState,
    api::models::{
        hotels::{HotelResponse, HotelWithRoomsResponse},
        users::CurrentUser,
    },
    errors::{Error, Result},
    services::HotelService,
    types::HotelId,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Parse the `hotelId` route segment. Anything but a positive integer is rejected.
fn parse_hotel_id(raw: &str) -> Result<HotelId> {
    match raw.parse::<HotelId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::BadRequest {
            message: format!("Invalid hotel id: {raw}"),
        }),
    }
}

#[utoipa::path(
    get,
    path = "/hotels",
    tag = "hotels",
    summary = "List hotels",
    description = "List every hotel. Only available to users holding a paid, in-person ticket that includes accommodation.",
    responses(
        (status = 200, description = "Hotels", body = [HotelResponse]),
        (status = 401, description = "Missing, invalid or revoked session token"),
        (status = 402, description = "The user's ticket does not include a hotel, is remote, or is not paid"),
        (status = 404, description = "No enrollment, no ticket, or no hotels"),
        (status = 500, description = "Internal server error"),
    ),
    security(
        ("BearerAuth" = [])
    )
)]
pub async fn list_hotels(State(state): State<AppState>, current_user: CurrentUser) -> Result<Json<Vec<HotelResponse>>> {
    let hotels = HotelService::new(state.storage.clone()).list_hotels(current_user.id).await?;
    Ok(Json(hotels))
}

#[utoipa::path(
    get,
    path = "/hotels/{hotel_id}",
    tag = "hotels",
    summary = "Get hotel with rooms",
    description = "Get a single hotel and all of its rooms. `Rooms` is an empty array when the hotel has none.",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID"),
    ),
    responses(
        (status = 200, description = "Hotel with its rooms", body = HotelWithRoomsResponse),
        (status = 400, description = "Hotel ID is not a positive integer"),
        (status = 401, description = "Missing, invalid or revoked session token"),
        (status = 402, description = "The user's ticket does not include a hotel, is remote, or is not paid"),
        (status = 404, description = "No enrollment, no ticket, or no such hotel"),
        (status = 500, description = "Internal server error"),
    ),
    security(
        ("BearerAuth" = [])
    )
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(hotel_id): Path<String>,
) -> Result<Json<HotelWithRoomsResponse>> {
    let hotel_id = parse_hotel_id(&hotel_id)?;
    let hotel = HotelService::new(state.storage.clone())
        .get_hotel_with_rooms(current_user.id, hotel_id)
        .await?;
    Ok(Json(hotel))
}

#[cfg(test)]
mod tests {
    use super::parse_hotel_id;
    use crate::auth::session::create_session_token;
    use crate::db::store::InMemoryStore;
    use crate::test_utils::{create_eligible_user, create_test_app, create_test_config, create_test_server, create_user_with_ticket};
    use crate::types::TicketStatus;
    use axum::http::StatusCode;
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};
    use sqlx::PgPool;

    #[test]
    fn test_parse_hotel_id() {
        assert_eq!(parse_hotel_id("12").unwrap(), 12);
        for raw in ["0", "-3", "abc", "1.5", "", "99999999999"] {
            assert!(parse_hotel_id(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_requests_without_token_are_unauthorized() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);

        server.get("/hotels").await.assert_status(StatusCode::UNAUTHORIZED);
        server.get("/hotels/1").await.assert_status(StatusCode::UNAUTHORIZED);
        // Authentication runs before the path is validated
        server.get("/hotels/abc").await.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);

        let response = server.get("/hotels").authorization_bearer("not-a-jwt").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_without_session_is_unauthorized() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        // Signed correctly, but the session was never stored
        let token = create_session_token(1, &create_test_config()).unwrap();

        server
            .get("/hotels")
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_session_without_enrollment_is_not_found() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let token = create_session_token(1, &create_test_config()).unwrap();
        store.create_session(1, &token);

        server.get("/hotels").authorization_bearer(&token).await.assert_status_not_found();
        server.get("/hotels/1").authorization_bearer(&token).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_unpaid_ticket_is_payment_required() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let now = Utc::now();
        let hotel = store.create_hotel("Hotel", "https://img/h.png", now, now);

        let token = create_user_with_ticket(&store, 1, TicketStatus::Reserved, false, true);
        server
            .get("/hotels")
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::PAYMENT_REQUIRED);
        server
            .get(&format!("/hotels/{}", hotel.id))
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::PAYMENT_REQUIRED);

        let token = create_user_with_ticket(&store, 2, TicketStatus::Paid, true, true);
        server
            .get("/hotels")
            .authorization_bearer(&token)
            .await
            .assert_status(StatusCode::PAYMENT_REQUIRED);

        let token = create_user_with_ticket(&store, 3, TicketStatus::Paid, false, false);
        let response = server.get(&format!("/hotels/{}", hotel.id)).authorization_bearer(&token).await;
        response.assert_status(StatusCode::PAYMENT_REQUIRED);
        response.assert_text("You need to pay to proceed this action");
    }

    #[tokio::test]
    async fn test_no_hotels_is_not_found() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let token = create_eligible_user(&store, 1);

        server.get("/hotels").authorization_bearer(&token).await.assert_status_not_found();
        server.get("/hotels/1").authorization_bearer(&token).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list_hotels() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let token = create_eligible_user(&store, 1);
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let hotel = store.create_hotel("Seaside", "https://img/seaside.png", created, created);

        let response = server.get("/hotels").authorization_bearer(&token).await;

        response.assert_status_ok();
        response.assert_json(&json!([{
            "id": hotel.id,
            "name": "Seaside",
            "image": "https://img/seaside.png",
            "createdAt": "2024-01-02T03:04:05.000Z",
            "updatedAt": "2024-01-02T03:04:05.000Z"
        }]));
    }

    #[tokio::test]
    async fn test_hotel_without_rooms() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let token = create_eligible_user(&store, 1);
        let now = Utc::now();
        let hotel = store.create_hotel("Empty", "https://img/e.png", now, now);

        let response = server.get(&format!("/hotels/{}", hotel.id)).authorization_bearer(&token).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], hotel.id);
        assert_eq!(body["name"], "Empty");
        assert_eq!(body["image"], "https://img/e.png");
        assert_eq!(body["Rooms"], json!([]));
    }

    #[tokio::test]
    async fn test_hotel_with_rooms() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let token = create_eligible_user(&store, 1);
        let created = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let hotel = store.create_hotel("Busy", "https://img/b.png", created, created);
        let room = store.create_room(hotel.id, "Penthouse", 3, created, created);
        store.create_room(hotel.id, "Garden", 2, created, created);

        let response = server.get(&format!("/hotels/{}", hotel.id)).authorization_bearer(&token).await;

        response.assert_status_ok();
        let body: Value = response.json();
        let rooms = body["Rooms"].as_array().unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(
            rooms[0],
            json!({
                "id": room.id,
                "name": "Penthouse",
                "capacity": 3,
                "hotelId": hotel.id,
                "createdAt": "2024-05-06T07:08:09.000Z",
                "updatedAt": "2024-05-06T07:08:09.000Z"
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_hotel_is_not_found() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let token = create_eligible_user(&store, 1);
        let now = Utc::now();
        let hotel = store.create_hotel("Only", "https://img/o.png", now, now);

        server
            .get(&format!("/hotels/{}", hotel.id + 1000))
            .authorization_bearer(&token)
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_invalid_hotel_id_is_bad_request() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let token = create_eligible_user(&store, 1);

        for path in ["/hotels/abc", "/hotels/0", "/hotels/-1"] {
            server
                .get(path)
                .authorization_bearer(&token)
                .await
                .assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_repeated_requests_return_identical_bodies() {
        let store = InMemoryStore::new();
        let server = create_test_server(&store);
        let token = create_eligible_user(&store, 1);
        let now = Utc::now();
        let hotel = store.create_hotel("Stable", "https://img/s.png", now, now);
        store.create_room(hotel.id, "A", 1, now, now);

        let path = format!("/hotels/{}", hotel.id);
        let first = server.get(&path).authorization_bearer(&token).await.text();
        let second = server.get(&path).authorization_bearer(&token).await.text();
        assert_eq!(first, second);

        let first = server.get("/hotels").authorization_bearer(&token).await.text();
        let second = server.get("/hotels").authorization_bearer(&token).await.text();
        assert_eq!(first, second);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_hotel_from_postgres(pool: PgPool) {
        let user_id: i32 = sqlx::query_scalar("INSERT INTO users (email, password_hash) VALUES ('guest@example.com', 'x') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
        let enrollment_id: i32 = sqlx::query_scalar("INSERT INTO enrollments (user_id, name) VALUES ($1, 'Guest') RETURNING id")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
        let ticket_type_id: i32 = sqlx::query_scalar(
            "INSERT INTO ticket_types (name, price, is_remote, includes_hotel) VALUES ('In person + hotel', 60000, false, true) RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO tickets (ticket_type_id, enrollment_id, status) VALUES ($1, $2, 'PAID')")
            .bind(ticket_type_id)
            .bind(enrollment_id)
            .execute(&pool)
            .await
            .unwrap();
        let hotel_id: i32 = sqlx::query_scalar("INSERT INTO hotels (name, image) VALUES ('Seaside', 'https://img.example.com/1.png') RETURNING id")
            .fetch_one(&pool)
            .await
            .unwrap();
        for (name, capacity) in [("101", 2), ("102", 3)] {
            sqlx::query("INSERT INTO rooms (name, capacity, hotel_id) VALUES ($1, $2, $3)")
                .bind(name)
                .bind(capacity)
                .bind(hotel_id)
                .execute(&pool)
                .await
                .unwrap();
        }

        let token = create_session_token(user_id, &create_test_config()).unwrap();
        sqlx::query("INSERT INTO sessions (user_id, token) VALUES ($1, $2)")
            .bind(user_id)
            .bind(&token)
            .execute(&pool)
            .await
            .unwrap();

        let server = create_test_app(pool);

        let response = server.get(&format!("/hotels/{hotel_id}")).authorization_bearer(&token).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], hotel_id);
        assert_eq!(body["name"], "Seaside");
        let rooms = body["Rooms"].as_array().unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0]["name"], "101");
        assert_eq!(rooms[1]["capacity"], 3);
        assert!(rooms.iter().all(|room| room["hotelId"] == hotel_id));

        let list: Value = server.get("/hotels").authorization_bearer(&token).await.json();
        assert_eq!(list.as_array().map(Vec::len), Some(1));

        server
            .get(&format!("/hotels/{}", hotel_id + 1000))
            .authorization_bearer(&token)
            .await
            .assert_status_not_found();
    }
}
