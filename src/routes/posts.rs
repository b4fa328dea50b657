// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post submission and listing.

use axum::{extract::State, routing::post, Extension, Json, Router};
use std::sync::Arc;

use crate::db::posts as post_store;
use crate::error::{AppError, Result};
use crate::middleware::Caller;
use crate::models::{Post, PostDraft};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/posts", post(create_posts).get(list_posts))
}

/// Persist a submission of one or more drafts.
///
/// A lone draft becomes a standalone post; two or more become a thread, and
/// the response is the thread head. Posts are attributed to the caller when
/// a valid session credential is presented, and stored unowned otherwise.
async fn create_posts(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
    Json(drafts): Json<Vec<PostDraft>>,
) -> Result<Json<Post>> {
    let owner = caller.user_id();
    if owner.is_none() {
        tracing::warn!("Persisting posts without an owner");
    }

    let record = post_store::create_posts(state.db.pool(), owner, &drafts).await?;

    tracing::info!(
        id = record.id,
        is_thread = record.is_thread,
        count = record.thread_count.unwrap_or(1),
        "Posts persisted"
    );

    Ok(Json(record))
}

/// List the caller's posts, oldest first. Listing filters by owner, so an
/// identity is required here even though submission tolerates its absence.
async fn list_posts(
    State(state): State<Arc<AppState>>,
    Extension(caller): Extension<Caller>,
) -> Result<Json<Vec<Post>>> {
    let owner = caller.user_id().ok_or(AppError::Unauthorized)?;
    let posts = post_store::list_posts(state.db.pool(), owner).await?;
    Ok(Json(posts))
}
