//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid MAPNOTES_ADDR: {0:?}")]
    InvalidAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: DEFAULT_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `MAPNOTES_ADDR`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = parse_addr(std::env::var("MAPNOTES_ADDR").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { addr, port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

fn parse_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_ADDR),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidAddr(value.to_owned())),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
