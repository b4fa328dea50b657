//! Post models for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post draft submitted by the client.
///
/// One draft becomes a standalone post; two or more become a thread in
/// submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub text: String,
    /// When to publish (absent means as soon as possible)
    #[serde(default)]
    pub send_at: Option<DateTime<Utc>>,
    /// When to self-retweet for a second round of reach
    #[serde(default)]
    pub retweet_at: Option<DateTime<Utc>>,
}

/// A persisted post row.
///
/// Thread heads carry `thread_count`; members carry `thread_parent` pointing
/// at the head row, never at an intermediate member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub is_thread: bool,
    /// 1-based position within the thread (1 = head)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_order: Option<i64>,
    /// Total member count, set on the head row only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_count: Option<i64>,
    /// Head row id, set on member rows only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_parent: Option<i64>,
    pub send_at: Option<DateTime<Utc>>,
    pub retweet_at: Option<DateTime<Utc>>,
    /// Owning user; NULL when the submission carried no valid identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}
