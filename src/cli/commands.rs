//! CLI command implementations
//!
//! Boot sequence for `serve`: read configuration, construct the store, then
//! bind the listener. The store must be ready before the server accepts
//! requests; any failure here is fatal.

use crate::config::ServerConfig;
use crate::observability::Logger;
use crate::server::HttpServer;
use crate::store::MemoryStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { host, port } => serve(host, port),
    }
}

fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = ServerConfig::from_env().map_err(|e| CliError::config_error(e.to_string()))?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = MemoryStore::new();
    Logger::info("store_ready", &[("backend", "memory")]);

    let server = HttpServer::new(config, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to start runtime: {}", e)))?;
    runtime
        .block_on(server.run())
        .map_err(|e| CliError::boot_failed(format!("server terminated: {}", e)))
}
