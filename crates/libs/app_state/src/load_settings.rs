use crate::{AppSettings, RawSettings};
use color_eyre::eyre::{Context, Result};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.yaml";

/// Loads `config/settings.yaml`, overridden by `APP__SECTION__KEY` environment variables.
pub fn load_app_settings() -> Result<AppSettings> {
    // Load .env first so its values take part in the environment overrides.
    dotenv::from_path(".env").ok();
    load_settings_from_path(Path::new(DEFAULT_SETTINGS_PATH), true)
}

/// Loads settings from an explicit file. Environment overrides only apply when `use_env` is set.
pub fn load_settings_from_path(path: &Path, use_env: bool) -> Result<AppSettings> {
    let config_path = path
        .canonicalize()
        .wrap_err_with(|| format!("Settings file not found: {}", path.display()))?;
    debug!("Loading settings from {}", config_path.display());

    let mut builder = config::Config::builder().add_source(config::File::from(config_path));
    if use_env {
        builder = builder.add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("api.allowed_origins")
                .try_parsing(true),
        );
    }

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}
