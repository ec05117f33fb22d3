use std::process::ExitCode;

use clap::Parser;

use demo_api::{logging, server, Cli, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::from(Cli::parse());
    logging::init_logging(&config);

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        },
    }
}
