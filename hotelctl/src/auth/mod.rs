//! Authentication.
//!
//! Clients sign in elsewhere on the platform and receive a JWT whose claims carry their user ID.
//! Every request to this service presents that token as `Authorization: Bearer <token>`; it is
//! accepted only if the signature verifies, it has not expired, and a session row still exists
//! for the exact token string.
//!
//! # Modules
//!
//! - [`session`]: JWT claims, token creation and verification
//! - [`current_user`]: the `CurrentUser` axum extractor
//!
//! # Usage in Handlers
//!
//! ```ignore
//! use hotelctl::api::models::users::CurrentUser;
//!
//! async fn protected_handler(current_user: CurrentUser) -> String {
//!     format!("Hello, user {}!", current_user.id)
//! }
//! ```

pub mod current_user;
pub mod session;
