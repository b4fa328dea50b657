//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup and passed to components explicitly;
//! nothing looks at the environment after boot.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Path to the SQLite database file
    pub database_path: String,
    /// Frontend URL allowed for CORS
    pub frontend_url: String,
    /// HS256 signing secret for session credentials (raw bytes)
    pub session_secret: Vec<u8>,
    /// Twitter OAuth app credentials
    pub twitter: ProviderCredentials,
    /// Mastodon OAuth app credentials
    pub mastodon: ProviderCredentials,
    /// Base URL of the Mastodon instance users sign in through
    pub mastodon_base_url: String,
}

/// OAuth client credentials for one provider.
#[derive(Debug, Clone)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            database_path: ":memory:".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            session_secret: b"test_session_key_32_bytes_min!!!".to_vec(),
            twitter: ProviderCredentials {
                client_id: "test_twitter_id".to_string(),
                client_secret: "test_twitter_secret".to_string(),
                redirect_uri: "http://localhost:5173/callback".to_string(),
            },
            mastodon: ProviderCredentials {
                client_id: "test_mastodon_id".to_string(),
                client_secret: "test_mastodon_secret".to_string(),
                redirect_uri: "http://localhost:5173/callback".to_string(),
            },
            mastodon_base_url: "https://mastodon.example".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "threadline.db".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            session_secret: env::var("SESSION_SECRET")
                .map_err(|_| ConfigError::Missing("SESSION_SECRET"))?
                .into_bytes(),
            twitter: ProviderCredentials {
                client_id: env::var("TWITTER_CLIENT_ID")
                    .map_err(|_| ConfigError::Missing("TWITTER_CLIENT_ID"))?,
                client_secret: env::var("TWITTER_CLIENT_SECRET")
                    .map(|v| v.trim().to_string())
                    .map_err(|_| ConfigError::Missing("TWITTER_CLIENT_SECRET"))?,
                redirect_uri: env::var("TWITTER_REDIRECT_URI")
                    .map_err(|_| ConfigError::Missing("TWITTER_REDIRECT_URI"))?,
            },
            mastodon: ProviderCredentials {
                client_id: env::var("MASTODON_CLIENT_ID")
                    .map_err(|_| ConfigError::Missing("MASTODON_CLIENT_ID"))?,
                client_secret: env::var("MASTODON_CLIENT_SECRET")
                    .map(|v| v.trim().to_string())
                    .map_err(|_| ConfigError::Missing("MASTODON_CLIENT_SECRET"))?,
                redirect_uri: env::var("MASTODON_REDIRECT_URI")
                    .map_err(|_| ConfigError::Missing("MASTODON_REDIRECT_URI"))?,
            },
            mastodon_base_url: env::var("MASTODON_BASE_URL")
                .unwrap_or_else(|_| "https://mastodon.social".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
