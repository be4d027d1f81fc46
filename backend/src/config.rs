//! Command line and environment configuration for the server.

use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};

/// finances-server: REST backend for tracking income, expenses and balances.
///
/// Every option can also be given through the environment variable shown in
/// its help text.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Config {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// SQLite connection string. The file is created if it doesn't exist.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:finances.db")]
    database_url: String,

    /// Where data is kept. `memory` loses everything on shutdown.
    #[arg(long, env = "FINANCES_STORAGE", value_enum, default_value_t = StorageBackend::Sqlite)]
    storage: StorageBackend,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:8080")]
    cors_origin: String,

    /// The logging verbosity: error, warn, info, debug or trace.
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Sqlite => f.write_str("sqlite"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn storage(&self) -> StorageBackend {
        self.storage
    }

    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}
