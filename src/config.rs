// Runtime configuration, read from the environment at startup.
//
// PORT has no default: starting without it is an error.

use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const PORT_VAR: &str = "PORT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT is not set")]
    MissingPort,

    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(PORT_VAR).ok_or(ConfigError::MissingPort)?;
        let port = raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        Ok(Self { port })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
