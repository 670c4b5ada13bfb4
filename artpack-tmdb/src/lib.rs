pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::TmdbClient;
pub use config::{
    ConfigSource, ConfigSources, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, DEFAULT_TIMEOUT_SECS,
    TmdbConfig, config_path, config_sources,
};
pub use error::TmdbError;
