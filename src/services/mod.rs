// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - social provider API clients.

pub mod mastodon;
pub mod provider;
pub mod twitter;

pub use mastodon::MastodonClient;
pub use provider::{Profile, ProviderKind, SocialClients, TokenResponse};
pub use twitter::TwitterClient;
