//! artpack CLI
//!
//! Command-line front end for fetching, resizing, and packaging TMDB artwork.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Run {
            csv,
            output,
            api_key,
            no_clear,
            no_archive,
            report,
        } => commands::run::run_batch(
            &csv,
            &output,
            api_key,
            &commands::run::RunOptions {
                no_clear,
                no_archive,
                report_path: report.as_deref(),
                quiet: cli.quiet,
            },
        ),
        Commands::Clear { output } => commands::workspace::run_clear(&output),
        Commands::Archive { output } => commands::workspace::run_archive(&output),
        Commands::Recipes => {
            commands::recipes::run_recipes();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

/// Route `log` output through env_logger.
///
/// Normal runs print bare messages, `--verbose` adds timestamps, levels, and
/// debug output. `RUST_LOG` still wins when set.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.parse_env("RUST_LOG");
    builder.init();
}
