//! Stored provider token model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's provider access token, one row per user.
///
/// Re-authentication overwrites the row in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredToken {
    /// Provider-assigned numeric user id (also the row key)
    pub id: i64,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// When the access token expires; NULL for providers whose tokens
    /// do not expire.
    pub expires_at: Option<DateTime<Utc>>,
}
