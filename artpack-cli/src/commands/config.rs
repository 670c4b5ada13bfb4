use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use artpack_lib::settings::OutputSettings;
use artpack_tmdb::{ConfigSource, TmdbConfig};

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(4).collect::<String>())
    }
}

/// Show current settings and their sources.
pub(crate) fn run_config_show() {
    let path = artpack_tmdb::config_path();
    let sources = artpack_tmdb::config_sources();

    log::info!(
        "{}",
        "TMDB Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    // load() fails without an API key; the other fields are still worth showing.
    let config = TmdbConfig::load().ok();

    let api_key = config.as_ref().map(|c| mask_value(&c.api_key));
    let api_base = config.as_ref().map(|c| c.api_base.clone());
    let image_base = config.as_ref().map(|c| c.image_base.clone());
    let timeout = config.as_ref().map(|c| format!("{}s", c.timeout_secs));

    let fields: [(&str, &ConfigSource, Option<String>); 4] = [
        ("api_key", &sources.api_key, api_key),
        ("api_base", &sources.api_base, api_base),
        ("image_base", &sources.image_base, image_base),
        ("timeout_secs", &sources.timeout_secs, timeout),
    ];

    for (name, source, value) in fields {
        match (source, value) {
            (ConfigSource::Missing, _) => log::info!(
                "  {:<13} {}",
                name,
                "not set".if_supports_color(Stdout, |t| t.red()),
            ),
            (_, Some(value)) => log::info!(
                "  {:<13} {} {}",
                name,
                value,
                format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
            ),
            (_, None) => log::info!(
                "  {:<13} {}",
                name,
                format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }

    let output = OutputSettings::load();
    log::info!("");
    log::info!(
        "{}",
        "Output".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  {:<13} {}", "dir", output.output_dir.display());
    log::info!("  {:<13} {}", "archive_prefix", output.archive_prefix);
}

/// Print the config file path.
pub(crate) fn run_config_path() {
    match artpack_tmdb::config_path() {
        Some(p) => log::info!("{}", p.display()),
        None => log::warn!("Could not determine config directory"),
    }
}
