use std::path::{Path, PathBuf};

use artpack_core::MovieId;

/// What happened to one input row.
#[derive(Debug, Clone)]
pub enum RowOutcome {
    /// Resolved and located; `files` lists everything written for it.
    /// `warnings` names artwork that could not be downloaded or converted.
    Processed {
        title: String,
        id: MovieId,
        files: Vec<PathBuf>,
        warnings: Vec<String>,
    },
    /// Resolved, but the service listed no usable artwork.
    NoAssets {
        title: String,
        id: MovieId,
        reason: Option<String>,
    },
    /// The title cell was empty.
    SkippedEmptyTitle,
    /// The title did not resolve. `reason` is set when the lookup itself failed.
    NotFound {
        title: String,
        reason: Option<String>,
    },
    /// The row could not be read or its processing broke down.
    Failed {
        title: Option<String>,
        message: String,
    },
}

impl RowOutcome {
    /// True when the title resolved, whether or not any file was written.
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed { .. } | Self::NoAssets { .. })
    }

    pub fn files(&self) -> &[PathBuf] {
        match self {
            Self::Processed { files, .. } => files,
            _ => &[],
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Processed { title, .. }
            | Self::NoAssets { title, .. }
            | Self::NotFound { title, .. } => Some(title),
            Self::Failed { title, .. } => title.as_deref(),
            Self::SkippedEmptyTitle => None,
        }
    }
}

/// Outcome of one row, tagged with its 1-based data row number.
#[derive(Debug, Clone)]
pub struct RowReport {
    pub row: usize,
    pub outcome: RowOutcome,
}

/// Per-row results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    rows: Vec<RowReport>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, row: usize, outcome: RowOutcome) {
        self.rows.push(RowReport { row, outcome });
    }

    pub fn rows(&self) -> &[RowReport] {
        &self.rows
    }

    /// Every file written during the run, in the order it was written.
    pub fn files(&self) -> Vec<&Path> {
        self.rows
            .iter()
            .flat_map(|r| r.outcome.files())
            .map(PathBuf::as_path)
            .collect()
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total_rows: self.rows.len(),
            ..BatchSummary::default()
        };
        for report in &self.rows {
            match &report.outcome {
                RowOutcome::Processed {
                    files, warnings, ..
                } => {
                    summary.processed += 1;
                    summary.files_written += files.len();
                    summary.warnings += warnings.len();
                }
                RowOutcome::NoAssets { .. } => {
                    summary.processed += 1;
                    summary.no_assets += 1;
                }
                RowOutcome::SkippedEmptyTitle => summary.skipped += 1,
                RowOutcome::NotFound { .. } => summary.not_found += 1,
                RowOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Write a human-readable processing log.
    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        use std::io::Write;

        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        let summary = self.summary();

        writeln!(file, "=== Artwork Batch Log ===")?;
        writeln!(
            file,
            "Date: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(file)?;
        writeln!(file, "--- Summary ---")?;
        writeln!(file, "{}", summary)?;
        writeln!(file, "Files written: {}", summary.files_written)?;
        writeln!(file, "Without artwork: {}", summary.no_assets)?;
        writeln!(file, "Skipped (empty title): {}", summary.skipped)?;
        writeln!(file, "Not found: {}", summary.not_found)?;
        writeln!(file, "Failed: {}", summary.failed)?;
        writeln!(file)?;
        writeln!(file, "--- Details ---")?;
        writeln!(file)?;

        for report in &self.rows {
            let row = report.row;
            match &report.outcome {
                RowOutcome::Processed {
                    title,
                    id,
                    files,
                    warnings,
                } => {
                    writeln!(
                        file,
                        "[OK] row {}: \"{}\" (id {}), {} file(s)",
                        row,
                        title,
                        id,
                        files.len()
                    )?;
                    for w in warnings {
                        writeln!(file, "     Warning: {}", w)?;
                    }
                }
                RowOutcome::NoAssets { title, id, reason } => {
                    writeln!(file, "[NO ARTWORK] row {}: \"{}\" (id {})", row, title, id)?;
                    if let Some(reason) = reason {
                        writeln!(file, "     Error: {}", reason)?;
                    }
                }
                RowOutcome::SkippedEmptyTitle => {
                    writeln!(file, "[SKIPPED] row {}: empty title", row)?;
                }
                RowOutcome::NotFound { title, reason } => {
                    writeln!(file, "[NOT FOUND] row {}: \"{}\"", row, title)?;
                    if let Some(reason) = reason {
                        writeln!(file, "     Error: {}", reason)?;
                    }
                }
                RowOutcome::Failed { title, message } => match title {
                    Some(t) => writeln!(file, "[ERROR] row {}: \"{}\": {}", row, t, message)?,
                    None => writeln!(file, "[ERROR] row {}: {}", row, message)?,
                },
            }
        }

        file.flush()
    }
}

/// Counts over a [`BatchReport`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_rows: usize,
    /// Rows whose title resolved (with or without artwork)
    pub processed: usize,
    pub no_assets: usize,
    pub skipped: usize,
    pub not_found: usize,
    pub failed: usize,
    pub files_written: usize,
    pub warnings: usize,
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} movies processed",
            self.processed, self.total_rows
        )
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
