//! Process configuration from command-line flags and environment variables.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::RngCore;
use tracing::warn;

/// Failures loading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The token secret file could not be read.
    #[error("failed to read token secret from {path}: {source}")]
    SecretRead {
        path: String,
        source: std::io::Error,
    },

    /// The token secret file is too small to sign tokens safely.
    #[error("token secret must be at least 32 bytes, got {0}")]
    SecretTooShort(usize),
}

/// Runtime configuration.
///
/// Every flag also reads from the environment, so container deployments can
/// configure the service without a command line.
#[derive(Debug, Parser)]
#[command(name = "paralympics-api", about = "REST API for paralympics reference data")]
pub struct Config {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: String,

    /// SQLite database path.
    #[arg(long, env = "DATABASE_URL", default_value = "paralympics.db")]
    pub database_url: String,

    /// File holding the token signing secret (at least 32 bytes).
    #[arg(long, env = "TOKEN_SECRET_FILE")]
    pub token_secret_file: Option<PathBuf>,
}

impl Config {
    /// Load the token signing secret.
    ///
    /// Without a configured secret file a random secret is generated for this
    /// process only, so issued tokens stop validating after a restart.
    pub fn load_token_secret(&self) -> Result<Vec<u8>, ConfigError> {
        let Some(path) = &self.token_secret_file else {
            warn!("TOKEN_SECRET_FILE not set; using an ephemeral signing secret");
            let mut secret = vec![0u8; 32];
            rand::thread_rng().fill_bytes(&mut secret);
            return Ok(secret);
        };
        let secret = fs::read(path).map_err(|source| ConfigError::SecretRead {
            path: path.display().to_string(),
            source,
        })?;
        if secret.len() < 32 {
            return Err(ConfigError::SecretTooShort(secret.len()));
        }
        Ok(secret)
    }
}
