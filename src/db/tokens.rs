// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Provider token storage, one row per user.

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::StoredToken;

/// Margin subtracted from a provider-declared token lifetime so a token is
/// treated as expired before the provider actually rejects it (clock skew,
/// network latency during refresh).
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Compute when a token issued at `issued_at` with a declared lifetime of
/// `expires_in` seconds should be considered expired.
pub fn token_expiry(issued_at: DateTime<Utc>, expires_in: i64) -> DateTime<Utc> {
    issued_at + Duration::seconds(expires_in - EXPIRY_MARGIN_SECS)
}

/// Insert or overwrite the stored token for `user_id`.
///
/// Repeated calls with the same arguments converge to the same row state.
pub async fn upsert_token(
    pool: &SqlitePool,
    user_id: i64,
    access_token: &str,
    refresh_token: Option<&str>,
    expires_at: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO users (id, access_token, refresh_token, expires_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            access_token = excluded.access_token,
            refresh_token = excluded.refresh_token,
            expires_at = excluded.expires_at
        "#,
    )
    .bind(user_id)
    .bind(access_token)
    .bind(refresh_token)
    .bind(expires_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch the stored token for `user_id`.
pub async fn get_token(pool: &SqlitePool, user_id: i64) -> Result<Option<StoredToken>, AppError> {
    let token = sqlx::query_as::<_, StoredToken>(
        "SELECT id, access_token, refresh_token, expires_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(token)
}
