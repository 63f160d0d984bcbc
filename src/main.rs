//! json-records server entry point.

use std::path::PathBuf;

use clap::Parser;
use json_records::http::{HttpServer, ServerConfig};
use json_records::logging;

/// Serve a JSON-file-backed user store over HTTP
#[derive(Parser, Debug)]
#[command(name = "json-records")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "JSON_RECORDS_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "JSON_RECORDS_PORT", default_value_t = 8080)]
    port: u16,

    /// Path to the JSON document holding the records
    #[arg(long, env = "JSON_RECORDS_DATA_FILE", default_value = "data.json")]
    data_file: PathBuf,

    /// Write the document as a single compact line instead of indented JSON
    #[arg(long)]
    compact: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, env = "JSON_RECORDS_LOG", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            data_file: self.data_file.clone(),
            pretty: !self.compact,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("failed to initialise logging: {e}");
        std::process::exit(1);
    }

    let server = match HttpServer::with_config(cli.server_config()) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "cannot open record store");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.start().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
