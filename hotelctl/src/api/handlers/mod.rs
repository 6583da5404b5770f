//! HTTP request handlers.
//!
//! Handlers extract the authenticated user and route parameters, call into
//! [`crate::services`], and serialize the result. Errors are returned as
//! [`crate::errors::Error`], which converts to the matching HTTP status.
//!
//! - [`hotels`]: hotel listing and hotel-with-rooms lookup

pub mod hotels;
