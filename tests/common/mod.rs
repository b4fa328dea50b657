// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use threadline::config::Config;
use threadline::db::Database;
use threadline::routes::create_router;
use threadline::services::{Profile, ProviderKind, SocialClients, TokenResponse};
use threadline::session::{self, SessionClaims};
use threadline::AppState;

/// Create a test app backed by an in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let db = Database::open_in_memory()
        .await
        .expect("Failed to open in-memory database");
    let providers = SocialClients::new(&config);

    let state = Arc::new(AppState {
        config,
        db,
        providers,
    });

    (create_router(state.clone()), state)
}

/// Create a standalone in-memory database.
#[allow(dead_code)]
pub async fn test_db() -> Database {
    Database::open_in_memory()
        .await
        .expect("Failed to open in-memory database")
}

/// Create a signed session credential for a Twitter identity.
#[allow(dead_code)]
pub fn test_credential(user_id: &str, secret: &[u8]) -> String {
    let tokens = TokenResponse {
        access_token: "tok1".to_string(),
        ..Default::default()
    };
    let profile = Profile {
        id: user_id.to_string(),
        name: "Alice Example".to_string(),
        username: "alice".to_string(),
        profile_image_url: None,
    };
    let claims = SessionClaims::new(ProviderKind::Twitter, &tokens, &profile);
    session::issue(&claims, secret).expect("Failed to sign test credential")
}
