use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Server configuration read from environment variables.
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    /// bcrypt work factor used when hashing new passwords
    pub bcrypt_cost: u32,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `LISTEN_ADDR` or `BCRYPT_COST` could not be parsed
    /// - `Err(ConfigError::BcryptCostOutOfRange)` - `BCRYPT_COST` is outside what bcrypt accepts
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR",
                reason: e.to_string(),
            })?;

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            None => bcrypt::DEFAULT_COST,
            Some(value) => {
                let cost = value
                    .parse::<u32>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "BCRYPT_COST",
                        reason: e.to_string(),
                    })?;

                if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
                    return Err(ConfigError::BcryptCostOutOfRange {
                        cost,
                        min: MIN_BCRYPT_COST,
                        max: MAX_BCRYPT_COST,
                    });
                }

                cost
            }
        };

        Ok(Self {
            database_url,
            listen_addr,
            bcrypt_cost,
        })
    }
}
