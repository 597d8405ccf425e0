use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Optional palette override file; the built-in css palette is used
    /// when unset
    pub palette_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            palette_path: env::var("PALETTE_PATH").ok().map(PathBuf::from),
        }
    }
}
