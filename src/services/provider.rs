// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Provider-neutral types and per-provider client dispatch.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AppError;

use super::{MastodonClient, TwitterClient};

/// Which social provider a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Twitter,
    Mastodon,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Twitter => "twitter",
            ProviderKind::Mastodon => "mastodon",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token endpoint response, normalized across providers.
///
/// Every field tolerates absence on decode: a provider error body yields an
/// empty `access_token` rather than a decode failure, and callers must
/// reject the empty token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// The authenticated user's profile, normalized across providers.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Provider-scoped durable user identifier
    pub id: String,
    pub name: String,
    pub username: String,
    pub profile_image_url: Option<String>,
}

/// One client per provider, selected by [`ProviderKind`].
#[derive(Clone)]
pub struct SocialClients {
    twitter: TwitterClient,
    mastodon: MastodonClient,
}

impl SocialClients {
    /// Create clients for every configured provider, sharing one HTTP client.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::new();
        Self {
            twitter: TwitterClient::new(http.clone(), config.twitter.clone()),
            mastodon: MastodonClient::new(
                http,
                config.mastodon.clone(),
                config.mastodon_base_url.clone(),
            ),
        }
    }

    /// Exchange an authorization code for provider tokens.
    pub async fn exchange_code(
        &self,
        kind: ProviderKind,
        code: &str,
    ) -> Result<TokenResponse, AppError> {
        match kind {
            ProviderKind::Twitter => self.twitter.exchange_code(code).await,
            ProviderKind::Mastodon => self.mastodon.exchange_code(code).await,
        }
    }

    /// Fetch the authenticated user's profile.
    pub async fn fetch_profile(
        &self,
        kind: ProviderKind,
        access_token: &str,
    ) -> Result<Profile, AppError> {
        match kind {
            ProviderKind::Twitter => self.twitter.fetch_profile(access_token).await,
            ProviderKind::Mastodon => self.mastodon.fetch_profile(access_token).await,
        }
    }
}
