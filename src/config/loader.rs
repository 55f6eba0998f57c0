use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment, FileFormat};
use log::{debug, info};

use super::defaults::DirectoryConfig;

pub const ENV_PREFIX: &str = "COSMOS_DIRECTORY";

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Layers the embedded defaults, the file at `path` and `COSMOS_DIRECTORY_*`
/// environment variables, in that order.
///
/// A missing file at `path` is created from the defaults first.
pub fn load_configuration(path: Option<&Path>) -> Result<DirectoryConfig> {
    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);
    build_configuration(path, environment)
}

fn build_configuration(path: Option<&Path>, environment: Environment) -> Result<DirectoryConfig> {
    let mut builder = Config::builder().add_source(config::File::from_str(get_default_config(), FileFormat::Toml));

    if let Some(path) = path {
        if !path.exists() {
            write_config_to(path, get_default_config()).context("Could not create default config")?;
            info!(path:% = path.display(); "Created new configuration file");
        }
        let filename = path.to_str().context("Invalid config file path")?;
        builder = builder.add_source(config::File::new(filename, FileFormat::Toml));
    }

    let cfg = builder
        .add_source(environment)
        .build()
        .context("Could not build configuration")?;

    let config: DirectoryConfig = cfg
        .try_deserialize()
        .context("Could not deserialize configuration")?;
    debug!(network:% = config.network, domain = config.domain(); "Configuration loaded");
    Ok(config)
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
