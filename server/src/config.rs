//! Server configuration.
//!
//! Built-in defaults are merged with an optional `nearby.toml` in the working
//! directory and then with `NEARBY_*` environment variables, the last source
//! winning.
use common::constants::{
    BASE_PORT, CONFIG_FILE, CORS_MAX_AGE_SECONDS, ENV_PREFIX, RESTAURANTS_FILE, SERVER_IP_ADDRESS,
};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON file holding the restaurant snapshot served by the storage.
    pub restaurants_file: PathBuf,
    pub cors_max_age_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: SERVER_IP_ADDRESS.to_string(),
            port: BASE_PORT,
            restaurants_file: PathBuf::from(RESTAURANTS_FILE),
            cors_max_age_secs: CORS_MAX_AGE_SECONDS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn cors_max_age(&self) -> Duration {
        Duration::from_secs(self.cors_max_age_secs)
    }
}
