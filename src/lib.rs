// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Threadline: queue tweets and threads through Twitter or Mastodon
//!
//! This crate provides the backend API for signing in through a social
//! provider and persisting single posts or ordered threads for delivery.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;

use config::Config;
use db::Database;
use services::SocialClients;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub providers: SocialClients,
}
