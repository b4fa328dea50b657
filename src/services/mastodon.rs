// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mastodon API client: OAuth2 code exchange and profile lookup.

use serde::Deserialize;

use crate::config::ProviderCredentials;
use crate::error::AppError;

use super::provider::{Profile, TokenResponse};

/// Scopes requested during the code exchange.
const OAUTH_SCOPES: &str = "read write";

/// Client for one Mastodon instance.
#[derive(Clone)]
pub struct MastodonClient {
    http: reqwest::Client,
    base_url: String,
    credentials: ProviderCredentials,
}

impl MastodonClient {
    pub fn new(http: reqwest::Client, credentials: ProviderCredentials, base_url: String) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Exchange an authorization code for tokens.
    ///
    /// Unlike Twitter, the client secret travels as a form field, there is
    /// no PKCE verifier, and the scope set is fixed. The response body is
    /// decoded as-is; callers reject an empty access token.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/oauth/token", self.base_url))
            .form(&[
                ("code", code),
                ("grant_type", "authorization_code"),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
                ("scope", OAUTH_SCOPES),
            ])
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Mastodon token exchange failed: {}", e)))?;

        response.json().await.map_err(|e| {
            AppError::Provider(format!("Failed to parse Mastodon token response: {}", e))
        })
    }

    /// Fetch the authenticated user's profile.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<Profile, AppError> {
        let response = self
            .http
            .get(format!(
                "{}/api/v1/accounts/verify_credentials",
                self.base_url
            ))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Mastodon profile fetch failed: {}", e)))?;

        let account: MastodonAccount = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse Mastodon account: {}", e)))?;

        // Accounts without a display name fall back to the handle.
        let name = if account.display_name.is_empty() {
            account.username.clone()
        } else {
            account.display_name
        };

        Ok(Profile {
            id: account.id,
            name,
            username: account.username,
            profile_image_url: account.avatar,
        })
    }
}

#[derive(Debug, Deserialize)]
struct MastodonAccount {
    id: String,
    username: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    avatar: Option<String>,
}
