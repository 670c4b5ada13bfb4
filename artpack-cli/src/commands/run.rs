use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use artpack_lib::settings::OutputSettings;
use artpack_lib::{
    BatchEvent, BatchReport, MetadataSource, Pipeline, TransformEngine, archive_today, workspace,
};
use artpack_tmdb::{TmdbClient, TmdbConfig};

use crate::CliError;
use crate::cli_types::OutputArgs;
use crate::commands::output_settings;

/// Flags of `artpack run` that shape a batch once the table is loaded.
pub(crate) struct RunOptions<'a> {
    pub no_clear: bool,
    pub no_archive: bool,
    pub report_path: Option<&'a Path>,
    pub quiet: bool,
}

/// Process every row of `csv`, clearing the output tree first, then archive.
pub(crate) fn run_batch(
    csv: &Path,
    args: &OutputArgs,
    api_key: Option<String>,
    options: &RunOptions<'_>,
) -> Result<(), CliError> {
    let settings = output_settings(args);

    // Loaded up front: clearing may delete the table if it lives in the output tree.
    let table = read_table(csv)?;

    let config = TmdbConfig::load_with_api_key(api_key).map_err(|e| {
        log::error!("Set the API key via the TMDB_API_KEY environment variable,");
        log::error!("the [tmdb] table of the config file, or --api-key.");
        CliError::config(e.to_string())
    })?;
    let client = TmdbClient::new(config).map_err(|e| CliError::config(e.to_string()))?;

    log::info!(
        "Processing {} into {}",
        csv.display().if_supports_color(Stdout, |t| t.cyan()),
        settings.output_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    process_table(&table, client, &settings, options).map(|_| ())
}

fn read_table(csv: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(csv)
        .map_err(|e| CliError::batch(format!("cannot read {}: {}", csv.display(), e)))
}

/// Clear, run, report, and archive for an already loaded table.
pub(crate) fn process_table<S: MetadataSource>(
    table: &[u8],
    source: S,
    settings: &OutputSettings,
    options: &RunOptions<'_>,
) -> Result<BatchReport, CliError> {
    let root = settings.output_dir.as_path();

    workspace::prepare(root)?;
    if !options.no_clear {
        let cleared = workspace::clear(root);
        if !cleared.is_clean() {
            log::warn!(
                "{} {} entries could not be removed from {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                cleared.failed.len(),
                root.display(),
            );
        }
    }

    let pb = if options.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    if let Ok(style) =
        ProgressStyle::with_template("  {spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=> ").tick_chars("/-\\|"));
    }

    let pipeline = Pipeline::new(source, TransformEngine::with_default_recipes());
    let report = pipeline
        .run_with_progress(table, root, |event| match event {
            BatchEvent::Started { total } => pb.set_length(total as u64),
            BatchEvent::RowStarted { title, .. } => pb.set_message(title),
            BatchEvent::RowFinished { .. } => pb.inc(1),
        })
        .map_err(|e| CliError::batch(e.to_string()))?;
    pb.finish_and_clear();

    let summary = report.summary();
    let mark = if summary.failed == 0 && summary.not_found == 0 {
        "\u{2714}".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()).to_string()
    };
    log::info!(
        "{} {} ({} files written, {} not found, {} skipped, {} failed)",
        mark,
        summary,
        summary.files_written,
        summary.not_found,
        summary.skipped,
        summary.failed,
    );

    if let Some(path) = options.report_path {
        report.write_to_file(path)?;
        log::info!("Processing log written to {}", path.display());
    }

    if options.no_archive {
        return Ok(report);
    }

    let archived = archive_today(root, &settings.archive_prefix)
        .map_err(|e| CliError::archive(e.to_string()))?;
    log::info!(
        "{} Archive: {} ({} files)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        archived.path.display().if_supports_color(Stdout, |t| t.cyan()),
        archived.entries.len(),
    );

    Ok(report)
}
