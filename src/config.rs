//! Process configuration, read once at startup from the environment (and `.env`).

use std::fmt;

use serenity::model::id::GuildId;

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://fitbeat.db?mode=rwc";
pub const DEFAULT_PREFIX: &str = "!";

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub giphy_api_key: String,
    pub database_url: String,
    pub command_prefix: String,
    /// When set, messages from every other guild are ignored.
    pub guild_id: Option<GuildId>,
}

impl Config {
    /// Loads `.env` if one exists, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let giphy_api_key = required("GIPHY_API_KEY")?;
        let database_url =
            optional("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let command_prefix = optional("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let guild_id = match optional("GUILD_ID") {
            Some(raw) => {
                let id = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    key: "GUILD_ID",
                    reason: e.to_string(),
                })?;
                if id == 0 {
                    return Err(ConfigError::Invalid {
                        key: "GUILD_ID",
                        reason: "must be non-zero".to_string(),
                    });
                }
                Some(GuildId::new(id))
            }
            None => None,
        };

        Ok(Self {
            discord_token,
            giphy_api_key,
            database_url,
            command_prefix,
            guild_id,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("giphy_api_key", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("command_prefix", &self.command_prefix)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}
