//! Extractor for the authenticated user.
//!
//! Requests authenticate with `Authorization: Bearer <token>`. The token must verify against the
//! configured secret *and* match a row in the `sessions` table, so signing out (deleting the row)
//! revokes a token that has not expired yet.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, instrument, trace};

use crate::{
    AppState,
    api::models::users::CurrentUser,
    auth::session,
    db::store::SessionStore,
    errors::{Error, Result},
};

/// Pull the bearer token out of the `Authorization` header
fn bearer_token(parts: &Parts) -> Result<&str> {
    let header = parts.headers.get(AUTHORIZATION).ok_or_else(|| {
        trace!("No Authorization header");
        Error::Unauthenticated { message: None }
    })?;

    let value = header.to_str().map_err(|_| Error::Unauthenticated {
        message: Some("Invalid authorization header".to_string()),
    })?;

    // Auth schemes are case-insensitive
    value
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or(Error::Unauthenticated { message: None })
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    #[instrument(skip(parts, state))]
    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = bearer_token(parts)?;
        let user = session::verify_session_token(token, &state.config)?;

        match state.storage.find_session_by_token(token).await? {
            Some(stored) if stored.user_id == user.id => {
                debug!("Authenticated user {}", user.id);
                Ok(user)
            }
            Some(_) => {
                debug!("Session belongs to a different user than the token claims");
                Err(Error::Unauthenticated { message: None })
            }
            None => {
                trace!("No session stored for token");
                Err(Error::Unauthenticated { message: None })
            }
        }
    }
}
