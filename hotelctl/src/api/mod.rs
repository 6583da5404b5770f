//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers
//! - **[`models`]**: Request/response data structures
//!
//! # Endpoints
//!
//! - `GET /hotels`: hotels available to the caller
//! - `GET /hotels/{hotelId}`: one hotel with its rooms
//!
//! Both require `Authorization: Bearer <token>`. The OpenAPI document is served at
//! `/api-docs/openapi.json` and rendered at `/docs`.

pub mod handlers;
pub mod models;
