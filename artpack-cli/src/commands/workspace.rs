use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use artpack_lib::{archive_today, workspace};

use crate::CliError;
use crate::cli_types::OutputArgs;
use crate::commands::output_settings;

/// Clear the output directory.
pub(crate) fn run_clear(args: &OutputArgs) -> Result<(), CliError> {
    let settings = output_settings(args);
    let summary = workspace::clear(&settings.output_dir);

    log::info!(
        "{} Cleared {} ({} entries removed)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings.output_dir.display(),
        summary.removed,
    );
    for (path, reason) in &summary.failed {
        log::warn!(
            "{} Could not remove {}: {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            path.display(),
            reason,
        );
    }
    Ok(())
}

/// Zip the output directory as it is now.
pub(crate) fn run_archive(args: &OutputArgs) -> Result<(), CliError> {
    let settings = output_settings(args);
    let summary = archive_today(&settings.output_dir, &settings.archive_prefix)
        .map_err(|e| CliError::archive(e.to_string()))?;

    log::info!(
        "{} Archived {} file(s) into {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.entries.len(),
        summary.path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
