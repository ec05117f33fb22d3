//! Server configuration.
//!
//! Values come from command-line flags, falling back to `DEMO_API_*`
//! environment variables and then to defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Default frontend dev server allowed by CORS.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(name = "demo-api")]
#[command(version)]
#[command(about = "Demonstration HTTP API: greetings, sorting, Fibonacci and statistics", long_about = None)]
pub struct Cli {
    /// Host to bind to
    #[arg(short = 'H', long, env = "DEMO_API_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "DEMO_API_PORT", default_value = "8080")]
    pub port: u16,

    /// Origin allowed to make cross-origin requests (repeatable)
    #[arg(
        long = "allowed-origin",
        env = "DEMO_API_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGIN
    )]
    pub allowed_origins: Vec<String>,

    /// Disable the CORS layer
    #[arg(long, env = "DEMO_API_NO_CORS")]
    pub no_cors: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DEMO_API_LOG", default_value = "info")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "DEMO_API_JSON_LOGS")]
    pub json_logs: bool,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
    /// Origins accepted by the CORS layer.
    pub allowed_origins: Vec<String>,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit logs as JSON.
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080),
            cors: true,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            addr: SocketAddr::new(cli.host, cli.port),
            cors: !cli.no_cors,
            allowed_origins: cli.allowed_origins,
            log_level: cli.log_level,
            json_logs: cli.json_logs,
        }
    }
}
