// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Caller identification from the session credential.

use crate::session::{self, SessionClaims};
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// The request's caller identity, if a valid session credential was
/// presented.
///
/// An absent or invalid credential leaves the caller anonymous rather than
/// rejecting the request; handlers that need an identity check for one.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<SessionClaims>);

impl Caller {
    /// Owner id for persisted rows: the provider user id parsed as i64.
    pub fn user_id(&self) -> Option<i64> {
        self.0
            .as_ref()
            .and_then(|claims| claims.identity.user_id().parse().ok())
    }
}

/// Middleware that attaches a [`Caller`] to every request.
pub async fn identify_caller(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let claims = bearer_token(&request)
        .and_then(|token| session::verify(token, &state.config.session_secret));

    if claims.is_none() {
        tracing::debug!("No valid session credential on request");
    }

    request.extensions_mut().insert(Caller(claims));
    next.run(request).await
}

/// Pull the raw credential out of the authorization header, with or without
/// the `Bearer ` scheme prefix.
fn bearer_token(request: &Request) -> Option<&str> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    Some(value.strip_prefix("Bearer ").unwrap_or(value))
}
