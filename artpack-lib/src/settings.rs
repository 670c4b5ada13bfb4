//! Output settings shared by every front end.
//!
//! Read from the `[output]` table of the same `config.toml` that holds the
//! TMDB settings.

use std::path::{Path, PathBuf};

/// Default output tree, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "static/TMDBImages";
/// Default archive name prefix.
pub const DEFAULT_ARCHIVE_PREFIX: &str = "TMDBImages";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub output_dir: PathBuf,
    pub archive_prefix: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            archive_prefix: DEFAULT_ARCHIVE_PREFIX.to_string(),
        }
    }
}

impl OutputSettings {
    /// Load from the config file, falling back to defaults field by field.
    pub fn load() -> Self {
        artpack_tmdb::config_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .map(|contents| Self::from_toml(&contents))
            .unwrap_or_default()
    }

    /// Parse the `[output]` table of a config document.
    pub fn from_toml(contents: &str) -> Self {
        let mut settings = Self::default();
        let Ok(doc) = contents.parse::<toml::Value>() else {
            return settings;
        };
        let Some(output) = doc.get("output") else {
            return settings;
        };
        if let Some(dir) = output.get("dir").and_then(|v| v.as_str()) {
            if !dir.is_empty() {
                settings.output_dir = PathBuf::from(dir);
            }
        }
        if let Some(prefix) = output.get("archive_prefix").and_then(|v| v.as_str()) {
            if !prefix.is_empty() {
                settings.archive_prefix = prefix.to_string();
            }
        }
        settings
    }

    /// Apply explicit values (e.g., from CLI args) over the loaded ones.
    pub fn with_overrides(mut self, output_dir: Option<&Path>, archive_prefix: Option<&str>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir.to_path_buf();
        }
        if let Some(prefix) = archive_prefix {
            self.archive_prefix = prefix.to_string();
        }
        self
    }
}
