// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Twitter API client: OAuth2 code exchange and profile lookup.

use serde::Deserialize;

use crate::config::ProviderCredentials;
use crate::error::AppError;

use super::provider::{Profile, TokenResponse};

/// PKCE verifier matching the plain-method challenge the frontend sends
/// with its authorization request.
const PKCE_CODE_VERIFIER: &str = "challenge";

/// Twitter API client.
#[derive(Clone)]
pub struct TwitterClient {
    http: reqwest::Client,
    base_url: String,
    credentials: ProviderCredentials,
}

impl TwitterClient {
    pub fn new(http: reqwest::Client, credentials: ProviderCredentials) -> Self {
        Self {
            http,
            base_url: "https://api.twitter.com/2".to_string(),
            credentials,
        }
    }

    /// Exchange an authorization code for tokens.
    ///
    /// Twitter wants HTTP Basic client authentication plus the PKCE verifier
    /// in the form body. The response body is decoded as-is, with no status
    /// check; a non-2xx error body decodes to an empty access token for the
    /// caller to reject. Single attempt, no retries.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/oauth2/token", self.base_url))
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[
                ("code", code),
                ("grant_type", "authorization_code"),
                ("client_id", self.credentials.client_id.as_str()),
                ("redirect_uri", self.credentials.redirect_uri.as_str()),
                ("code_verifier", PKCE_CODE_VERIFIER),
            ])
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Twitter token exchange failed: {}", e)))?;

        response.json().await.map_err(|e| {
            AppError::Provider(format!("Failed to parse Twitter token response: {}", e))
        })
    }

    /// Fetch the authenticated user's profile.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<Profile, AppError> {
        let response = self
            .http
            .get(format!("{}/users/me", self.base_url))
            .query(&[("user.fields", "profile_image_url")])
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Twitter profile fetch failed: {}", e)))?;

        let user: TwitterUserResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse Twitter profile: {}", e)))?;

        Ok(Profile {
            id: user.data.id,
            name: user.data.name,
            username: user.data.username,
            profile_image_url: user.data.profile_image_url,
        })
    }
}

/// Twitter wraps the user object in a `data` envelope.
#[derive(Debug, Deserialize)]
struct TwitterUserResponse {
    data: TwitterUser,
}

#[derive(Debug, Deserialize)]
struct TwitterUser {
    id: String,
    name: String,
    username: String,
    #[serde(default)]
    profile_image_url: Option<String>,
}
