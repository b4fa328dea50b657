// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Social sign-in: authorization-code exchange and session issuance.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::tokens;
use crate::error::{AppError, Result};
use crate::services::ProviderKind;
use crate::session::{self, SessionClaims};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth", post(authenticate))
}

/// Sign-in request: the authorization code from the provider's consent
/// screen, plus which provider issued it.
#[derive(Deserialize)]
pub struct AuthRequest {
    code: String,
    #[serde(default = "default_provider")]
    provider: ProviderKind,
}

fn default_provider() -> ProviderKind {
    ProviderKind::Twitter
}

/// Successful sign-in response. `access_token` is the signed session
/// credential, not the provider token.
#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub id: String,
    pub name: String,
    pub profile_image_url: Option<String>,
    pub username: String,
}

/// Exchange an authorization code, issue a session credential, and store
/// the provider access token.
///
/// The steps run sequentially; each depends on the previous one's output.
async fn authenticate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AuthRequest>,
) -> Result<Json<AuthResponse>> {
    let provider = body.provider;

    let token_response = state.providers.exchange_code(provider, &body.code).await?;

    // The exchange decodes whatever the provider sent back; an error body
    // shows up here as an empty token.
    if token_response.access_token.is_empty() {
        return Err(AppError::Provider(format!(
            "{} returned no access token",
            provider
        )));
    }

    let profile = state
        .providers
        .fetch_profile(provider, &token_response.access_token)
        .await?;

    let claims = SessionClaims::new(provider, &token_response, &profile);
    let credential = session::issue(&claims, &state.config.session_secret)?;

    let user_id: i64 = profile
        .id
        .parse()
        .map_err(|_| AppError::Conversion(profile.id.clone()))?;

    let issued_at = chrono::Utc::now();
    let expires_at = token_response
        .expires_in
        .map(|secs| tokens::token_expiry(issued_at, secs));

    tokens::upsert_token(
        state.db.pool(),
        user_id,
        &token_response.access_token,
        token_response.refresh_token.as_deref(),
        expires_at,
    )
    .await?;

    tracing::info!(
        provider = %provider,
        user_id,
        username = %profile.username,
        "Sign-in complete"
    );

    Ok(Json(AuthResponse {
        access_token: credential,
        id: profile.id,
        name: profile.name,
        profile_image_url: profile.profile_image_url,
        username: profile.username,
    }))
}
