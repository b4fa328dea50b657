// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post persistence: standalone posts and ordered threads.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::AppError;
use crate::models::{Post, PostDraft};

/// Persist a submission of one or more drafts for `owner`.
///
/// A single draft becomes a standalone post. Two or more become a thread:
/// the first draft is inserted as the head (thread_order 1, thread_count N)
/// to obtain its id, then the rest go in as one multi-row insert, each
/// pointing at the head.
///
/// The head and member inserts are separate statements. If the member batch
/// fails the head row stays behind and the caller sees
/// [`AppError::PartialWrite`].
pub async fn create_posts(
    pool: &SqlitePool,
    owner: Option<i64>,
    drafts: &[PostDraft],
) -> Result<Post, AppError> {
    match drafts {
        [] => Err(AppError::BadRequest("post list is empty".to_string())),
        [single] => insert_single(pool, owner, single).await,
        _ => insert_thread(pool, owner, drafts).await,
    }
}

/// Insert one standalone post.
async fn insert_single(
    pool: &SqlitePool,
    owner: Option<i64>,
    draft: &PostDraft,
) -> Result<Post, AppError> {
    let result = sqlx::query(
        "INSERT INTO posts (text, send_at, retweet_at, user_id) VALUES (?, ?, ?, ?)",
    )
    .bind(&draft.text)
    .bind(draft.send_at)
    .bind(draft.retweet_at)
    .bind(owner)
    .execute(pool)
    .await?;

    Ok(Post {
        id: result.last_insert_rowid(),
        text: draft.text.clone(),
        is_thread: false,
        thread_order: None,
        thread_count: None,
        thread_parent: None,
        send_at: draft.send_at,
        retweet_at: draft.retweet_at,
        user_id: owner,
    })
}

/// Insert a thread: head row first, then all members in one statement.
async fn insert_thread(
    pool: &SqlitePool,
    owner: Option<i64>,
    drafts: &[PostDraft],
) -> Result<Post, AppError> {
    let count = drafts.len() as i64;
    let head = &drafts[0];

    let result = sqlx::query(
        "INSERT INTO posts (text, is_thread, thread_order, thread_count, send_at, retweet_at, user_id) \
         VALUES (?, TRUE, 1, ?, ?, ?, ?)",
    )
    .bind(&head.text)
    .bind(count)
    .bind(head.send_at)
    .bind(head.retweet_at)
    .bind(owner)
    .execute(pool)
    .await?;

    let head_id = result.last_insert_rowid();

    // Members 2..N in one statement. push_values emits the placeholder row
    // and binds its parameters together, so the two cannot drift apart.
    let mut builder = QueryBuilder::<Sqlite>::new(
        "INSERT INTO posts (text, is_thread, thread_order, thread_parent, send_at, retweet_at, user_id) ",
    );
    builder.push_values(
        drafts.iter().enumerate().skip(1),
        |mut row, (position, draft)| {
            row.push_bind(&draft.text)
                .push_bind(true)
                .push_bind((position + 1) as i64)
                .push_bind(head_id)
                .push_bind(draft.send_at)
                .push_bind(draft.retweet_at)
                .push_bind(owner);
        },
    );

    if let Err(e) = builder.build().execute(pool).await {
        tracing::error!(head_id, error = %e, "Thread member batch failed after head insert");
        return Err(AppError::PartialWrite {
            head_id,
            reason: e.to_string(),
        });
    }

    Ok(Post {
        id: head_id,
        text: head.text.clone(),
        is_thread: true,
        thread_order: Some(1),
        thread_count: Some(count),
        thread_parent: None,
        send_at: head.send_at,
        retweet_at: head.retweet_at,
        user_id: owner,
    })
}

/// List a user's posts, oldest first.
pub async fn list_posts(pool: &SqlitePool, user_id: i64) -> Result<Vec<Post>, AppError> {
    let posts = sqlx::query_as::<_, Post>(
        "SELECT id, text, is_thread, thread_order, thread_count, thread_parent, \
                send_at, retweet_at, user_id \
         FROM posts WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}
