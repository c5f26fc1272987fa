//! RON configuration loading
//!
//! An explicit `MAKOS_CONFIG_PATH` must exist. Without one, `makos.ron` and
//! then `.makos/config.ron` are tried relative to the working directory, and
//! the built-in defaults apply when neither is present.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};

use super::Config;

pub const CONFIG_PATH_VAR: &str = "MAKOS_CONFIG_PATH";

const DISCOVERED_FILES: &[&str] = &["makos.ron", ".makos/config.ron"];

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Discovered(PathBuf),
    Defaults,
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_ron(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

pub fn load_with_discovery() -> Result<Config> {
    let explicit = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    let (config, source) = discover(explicit, Path::new("."))?;

    match &source {
        ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
            tracing::info!("loaded config from {}", path.display());
        }
        ConfigSource::Defaults => tracing::info!("no config file found, using defaults"),
    }
    Ok(config)
}

fn discover(explicit: Option<PathBuf>, base: &Path) -> Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("{} points at a missing file: {}", CONFIG_PATH_VAR, path.display());
        }
        return Ok((load_from_file(&path)?, ConfigSource::Explicit(path)));
    }

    match DISCOVERED_FILES
        .iter()
        .map(|name| base.join(name))
        .find(|path| path.is_file())
    {
        Some(path) => Ok((load_from_file(&path)?, ConfigSource::Discovered(path))),
        None => Ok((Config::default(), ConfigSource::Defaults)),
    }
}

fn parse_ron(content: &str) -> Result<Config> {
    let config: Config = ron::from_str(content).context("Malformed RON")?;
    config.validate().map_err(|e| anyhow!(e))?;
    Ok(config)
}
