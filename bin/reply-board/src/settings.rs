//! Runtime settings.
//!
//! Sources, lowest to highest precedence: built-in defaults, an optional
//! `reply-board.toml`, `REPLY_BOARD__SECTION__KEY` environment variables,
//! and finally the bare `PORT` / `DATABASE_URL` variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub argon2: Argon2Settings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// sqlx connection string, e.g. `sqlite:reply_board.db`
    pub url: String,
}

/// Costs for newly hashed delete passwords.
#[derive(Debug, Clone, Deserialize)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name("reply-board").required(false))
            .add_source(Environment::with_prefix("REPLY_BOARD").separator("__"))
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000)?
        .set_default("database.url", "sqlite:reply_board.db")?
        .set_default("argon2.memory_kib", 19456)?
        .set_default("argon2.iterations", 2)?
        .set_default("argon2.parallelism", 1)
}
