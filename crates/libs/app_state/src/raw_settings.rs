use serde::Deserialize;
use std::path::PathBuf;

/// Settings exactly as they appear in `settings.yaml` and the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    pub classifier: RawClassifierSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Fallback filter directive when `RUST_LOG` is not set, e.g. `info` or `api=debug`.
    pub level: String,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub public_url: String,
    /// Origins allowed by CORS, `*` allows any origin.
    pub allowed_origins: Vec<String>,
    /// Largest accepted request body, in megabytes.
    pub body_limit_mb: usize,
    /// Whether `/uploadfile` may read `file_uri` from the local filesystem.
    pub allow_local_files: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawClassifierSettings {
    /// CSV file with `red,green,blue,name` columns.
    pub samples_path: PathBuf,
    pub max_depth: usize,
    pub seed: u64,
    pub min_samples_split: usize,
}
