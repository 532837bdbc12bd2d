//! Environment-driven service configuration

use std::env;
use std::path::PathBuf;

use case_core::intake::DEFAULT_MAX_UPLOAD_BYTES;

/// Top-level service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory accepted uploads are written into
    pub upload_dir: PathBuf,
    /// Per-file size cap, enforced before any write
    pub max_upload_bytes: u64,
    /// Seed the demonstration records on startup
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: env::var("BIND_ADDRESS")
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR")
                    .unwrap_or_else(|_| "uploads".to_string())
                    .into(),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
                seed_demo_data: env::var("SEED_DEMO_DATA")
                    .map(|value| value != "0" && !value.eq_ignore_ascii_case("false"))
                    .unwrap_or(true),
            },
        }
    }
}
