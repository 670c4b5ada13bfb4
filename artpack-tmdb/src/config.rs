use std::path::PathBuf;

use crate::error::TmdbError;

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_API_KEY: &str = "TMDB_API_KEY";
const ENV_API_BASE: &str = "TMDB_API_BASE";
const ENV_IMAGE_BASE: &str = "TMDB_IMAGE_BASE";
const ENV_TIMEOUT: &str = "TMDB_TIMEOUT_SECS";

/// Connection settings for the TMDB API.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub api_base: String,
    pub image_base: String,
    pub timeout_secs: u64,
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each config field.
#[derive(Debug)]
pub struct ConfigSources {
    pub api_key: ConfigSource,
    pub api_base: ConfigSource,
    pub image_base: ConfigSource,
    pub timeout_secs: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub(crate) struct ConfigFile {
    pub(crate) tmdb: Option<TmdbSection>,
}

#[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
pub(crate) struct TmdbSection {
    pub(crate) api_key: Option<String>,
    pub(crate) api_base: Option<String>,
    pub(crate) image_base: Option<String>,
    pub(crate) timeout_secs: Option<u64>,
}

impl TmdbConfig {
    /// Load settings from environment variables and the config file.
    ///
    /// Priority: env vars > config file > built-in defaults.
    /// The API key has no default and must come from one of the first two.
    pub fn load() -> Result<Self, TmdbError> {
        resolve(|var| std::env::var(var).ok(), load_config_file())
    }

    /// Like [`load`](Self::load), with an explicit API key (e.g., from CLI
    /// args) taking precedence over every other source.
    pub fn load_with_api_key(api_key: Option<String>) -> Result<Self, TmdbError> {
        resolve(
            with_api_key(api_key, |var| std::env::var(var).ok()),
            load_config_file(),
        )
    }

    /// Full CDN URL for a service-relative image path.
    pub fn image_url(&self, file_path: &str) -> String {
        format!("{}{}", self.image_base.trim_end_matches('/'), file_path)
    }

    pub(crate) fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), endpoint)
    }
}

/// Build a config from an environment lookup and an optional file section.
pub(crate) fn resolve(
    env: impl Fn(&str) -> Option<String>,
    file: Option<TmdbSection>,
) -> Result<TmdbConfig, TmdbError> {
    let file = file.unwrap_or_default();

    let api_key = env(ENV_API_KEY)
        .filter(|k| is_set(k))
        .or(file.api_key.filter(|k| is_set(k)))
        .ok_or_else(|| {
            TmdbError::config(format!(
                "Missing api_key. Set {} env var or add it to the [tmdb] table of the config file",
                ENV_API_KEY
            ))
        })?;

    let api_base = env(ENV_API_BASE)
        .or(file.api_base)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    let image_base = env(ENV_IMAGE_BASE)
        .or(file.image_base)
        .unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_string());

    let timeout_secs = match env(ENV_TIMEOUT) {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            TmdbError::config(format!(
                "{} must be a whole number of seconds, got '{}'",
                ENV_TIMEOUT, raw
            ))
        })?,
        None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    Ok(TmdbConfig {
        api_key,
        api_base,
        image_base,
        timeout_secs,
    })
}

/// Layer an explicit API key over an environment lookup. A blank key counts
/// as not given.
pub(crate) fn with_api_key(
    api_key: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> impl Fn(&str) -> Option<String> {
    move |var| {
        if var == ENV_API_KEY {
            api_key.clone().filter(|k| is_set(k)).or_else(|| env(var))
        } else {
            env(var)
        }
    }
}

fn is_set(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("artpack").join("config.toml"))
}

/// Determine where each config field is coming from.
pub fn config_sources() -> ConfigSources {
    sources(|var| std::env::var(var).ok(), load_config_file())
}

pub(crate) fn sources(
    env: impl Fn(&str) -> Option<String>,
    file: Option<TmdbSection>,
) -> ConfigSources {
    let file = file.unwrap_or_default();
    let pick = |var: &'static str, in_file: bool, has_default: bool| {
        if env(var).is_some_and(|v| is_set(&v)) {
            ConfigSource::EnvVar(var)
        } else if in_file {
            ConfigSource::ConfigFile
        } else if has_default {
            ConfigSource::Default
        } else {
            ConfigSource::Missing
        }
    };

    ConfigSources {
        api_key: pick(ENV_API_KEY, file.api_key.as_deref().is_some_and(is_set), false),
        api_base: pick(ENV_API_BASE, file.api_base.is_some(), true),
        image_base: pick(ENV_IMAGE_BASE, file.image_base.is_some(), true),
        timeout_secs: pick(ENV_TIMEOUT, file.timeout_secs.is_some(), true),
    }
}

fn load_config_file() -> Option<TmdbSection> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    parse_config(&content)
}

pub(crate) fn parse_config(content: &str) -> Option<TmdbSection> {
    match toml::from_str::<ConfigFile>(content) {
        Ok(config) => config.tmdb,
        Err(e) => {
            log::warn!("Ignoring unreadable config file: {}", e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
