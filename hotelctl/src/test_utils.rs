//! Test utilities (available with `test-utils` feature).
//!
//! Fixtures seed an [`InMemoryStore`]; [`create_test_server`] puts the full router in front of it.

use std::sync::Arc;

use axum_test::TestServer;
use sqlx::PgPool;

use crate::{
    Application,
    auth::session::create_session_token,
    config::Config,
    db::store::{InMemoryStore, PgStore},
    types::{TicketStatus, UserId},
};

pub fn create_test_config() -> Config {
    Config {
        secret_key: Some("test-secret-key-for-hotel-api".to_string()),
        ..Default::default()
    }
}

/// Full application router over `store`
pub fn create_test_server(store: &InMemoryStore) -> TestServer {
    let app = Application::with_storage(create_test_config(), Arc::new(store.clone())).expect("Failed to create application");
    TestServer::new(app.router.into_make_service()).expect("Failed to create test server")
}

/// Full application router over a migrated PostgreSQL pool, as handed out by `#[sqlx::test]`
pub fn create_test_app(pool: PgPool) -> TestServer {
    let app = Application::with_storage(create_test_config(), Arc::new(PgStore::new(pool))).expect("Failed to create application");
    TestServer::new(app.router.into_make_service()).expect("Failed to create test server")
}

/// Issue a token for `user_id` and store its session, as signing in would
pub fn create_session(store: &InMemoryStore, user_id: UserId) -> String {
    let token = create_session_token(user_id, &create_test_config()).expect("Failed to create session token");
    store.create_session(user_id, &token);
    token
}

/// A signed-in user with an enrollment and a ticket of the given kind. Returns the bearer token.
pub fn create_user_with_ticket(
    store: &InMemoryStore,
    user_id: UserId,
    status: TicketStatus,
    is_remote: bool,
    includes_hotel: bool,
) -> String {
    let enrollment = store.create_enrollment(user_id, &format!("User {user_id}"));
    let ticket_type = store.create_ticket_type("Test ticket", 25000, is_remote, includes_hotel);
    store.create_ticket(enrollment.id, &ticket_type, status);
    create_session(store, user_id)
}

/// A signed-in user holding a paid, in-person ticket that includes a hotel
pub fn create_eligible_user(store: &InMemoryStore, user_id: UserId) -> String {
    create_user_with_ticket(store, user_id, TicketStatus::Paid, false, true)
}
