//! API models for the authenticated caller.

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// The user a request was authenticated as. Only the ID travels in the session token; everything
/// else about the user lives in other services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
}
