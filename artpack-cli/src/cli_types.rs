//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artpack")]
#[command(about = "Fetch TMDB artwork for a list of movies and package it", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by commands that work on the output tree.
#[derive(Args, Clone)]
pub(crate) struct OutputArgs {
    /// Output directory (default: static/TMDBImages, or [output].dir in the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Archive name prefix (default: TMDBImages)
    #[arg(long)]
    pub archive_prefix: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Clear the output directory, process a CSV of movie names, and zip the results
    Run {
        /// CSV file with a "movie name" column
        csv: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// TMDB API key (overrides TMDB_API_KEY and the config file)
        #[arg(long)]
        api_key: Option<String>,

        /// Keep existing files in the output directory
        #[arg(long)]
        no_clear: bool,

        /// Skip building the archive
        #[arg(long)]
        no_archive: bool,

        /// Write a per-row processing log to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Remove everything inside the output directory
    Clear {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Zip the current contents of the output directory
    Archive {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the size/format recipes applied to backdrops
    Recipes,

    /// Inspect TMDB configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and where each value comes from
    Show,

    /// Print the config file path
    Path,
}
