//! Runtime settings.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

fn default_db_path() -> PathBuf {
    PathBuf::from("server").join("database").join("jokes.db")
}

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "jokes-server")]
#[command(about = "HTTP endpoint serving jokes from a local SQLite store")]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Relative paths resolve against the process working directory.
    #[arg(skip = default_db_path())]
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            db_path: default_db_path(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
