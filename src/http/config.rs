//! HTTP server configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where to listen and where the record file lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Backing JSON document (default: "data.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Indent the document on disk (default: true)
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_pretty() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            pretty: default_pretty(),
        }
    }
}

impl ServerConfig {
    /// Default config on another port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` string to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
