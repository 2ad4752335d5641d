//! CLI argument definitions using clap
//!
//! Commands:
//! - cinedb serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// cinedb - a schema-flexible movie catalog served over HTTP
#[derive(Parser, Debug)]
#[command(name = "cinedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT, default 3000)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
