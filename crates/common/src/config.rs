//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// PostgreSQL connection URL; the in-memory store is used when absent
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    /// Bearer token validation (HS256 shared secret)
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config = Self {
            database_url: non_empty("DATABASE_URL"),
            database_max_connections: match non_empty("DATABASE_MAX_CONNECTIONS") {
                Some(raw) => raw.parse().map_err(|_| {
                    anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be a positive integer")
                })?,
                None => 5,
            },

            jwt_secret: non_empty("JWT_SECRET")
                .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?,
            jwt_issuer: non_empty("JWT_ISSUER"),
            jwt_audience: non_empty("JWT_AUDIENCE"),

            rust_log: non_empty("RUST_LOG")
                .unwrap_or_else(|| "jobboard=info,tower_http=info".to_string()),
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match non_empty("PORT") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?,
                None => 3000,
            },
        };

        Ok(config)
    }

    /// Socket address the HTTP server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("HOST '{}' is not an IP address: {}", self.host, e))?;

        Ok(SocketAddr::new(ip, self.port))
    }
}
