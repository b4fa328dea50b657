// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session credentials: normalized provider claims signed as JWTs.
//!
//! A session credential asserts exactly one provider identity. Claim keys
//! are namespaced per provider (`twitter:user_id`, `mastodon:user_id`, ...)
//! so a later version could link several providers in one credential
//! without key collisions.

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::{Profile, ProviderKind, TokenResponse};

/// Fixed `nbf` claim stamped on every session credential
/// (2015-10-10T12:00:00Z). Always in the past, so it never rejects a token.
pub const NOT_BEFORE: i64 = 1_444_478_400;

/// Claims carried by a session credential. No `exp` is issued; the fixed
/// `nbf` floor is the only time claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub nbf: i64,
    #[serde(flatten)]
    pub identity: ProviderIdentity,
}

/// Identity claims for exactly one provider.
///
/// Field names carry the provider namespace on the wire, so the untagged
/// representation deserializes unambiguously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderIdentity {
    Twitter(TwitterIdentity),
    Mastodon(MastodonIdentity),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterIdentity {
    #[serde(rename = "twitter:access_token")]
    pub access_token: String,
    #[serde(rename = "twitter:user_id")]
    pub user_id: String,
    #[serde(rename = "twitter:username")]
    pub username: String,
    #[serde(rename = "twitter:profile_image_url")]
    pub profile_image_url: Option<String>,
    #[serde(rename = "twitter:name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MastodonIdentity {
    #[serde(rename = "mastodon:access_token")]
    pub access_token: String,
    #[serde(rename = "mastodon:user_id")]
    pub user_id: String,
    #[serde(rename = "mastodon:username")]
    pub username: String,
    #[serde(rename = "mastodon:profile_image_url")]
    pub profile_image_url: Option<String>,
    #[serde(rename = "mastodon:name")]
    pub name: String,
}

impl SessionClaims {
    /// Normalize a provider auth + profile pair into session claims.
    ///
    /// Pure and deterministic; the same inputs always produce the same
    /// claim set.
    pub fn new(kind: ProviderKind, tokens: &TokenResponse, profile: &Profile) -> Self {
        let identity = match kind {
            ProviderKind::Twitter => ProviderIdentity::Twitter(TwitterIdentity {
                access_token: tokens.access_token.clone(),
                user_id: profile.id.clone(),
                username: profile.username.clone(),
                profile_image_url: profile.profile_image_url.clone(),
                name: profile.name.clone(),
            }),
            ProviderKind::Mastodon => ProviderIdentity::Mastodon(MastodonIdentity {
                access_token: tokens.access_token.clone(),
                user_id: profile.id.clone(),
                username: profile.username.clone(),
                profile_image_url: profile.profile_image_url.clone(),
                name: profile.name.clone(),
            }),
        };

        Self {
            nbf: NOT_BEFORE,
            identity,
        }
    }
}

impl ProviderIdentity {
    pub fn provider(&self) -> ProviderKind {
        match self {
            ProviderIdentity::Twitter(_) => ProviderKind::Twitter,
            ProviderIdentity::Mastodon(_) => ProviderKind::Mastodon,
        }
    }

    /// Provider-scoped user id, as the provider reports it.
    pub fn user_id(&self) -> &str {
        match self {
            ProviderIdentity::Twitter(t) => &t.user_id,
            ProviderIdentity::Mastodon(m) => &m.user_id,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            ProviderIdentity::Twitter(t) => &t.username,
            ProviderIdentity::Mastodon(m) => &m.username,
        }
    }

    pub fn access_token(&self) -> &str {
        match self {
            ProviderIdentity::Twitter(t) => &t.access_token,
            ProviderIdentity::Mastodon(m) => &m.access_token,
        }
    }
}

/// Sign claims into a session credential.
pub fn issue(claims: &SessionClaims, secret: &[u8]) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AppError::Signing(e.to_string()))
}

/// Verify a session credential and return its claims.
///
/// Returns `None` on any parse or signature failure. Session credentials
/// carry no `exp`, so only the `nbf` floor is validated.
pub fn verify(token: &str, secret: &[u8]) -> Option<SessionClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_nbf = true;
    validation.required_spec_claims.clear();

    match decode::<SessionClaims>(token, &DecodingKey::from_secret(secret), &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::debug!(error = %e, "Session credential rejected");
            None
        }
    }
}
