use std::fs::File;
use std::io::{BufReader, Read};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use artpack_core::{MetadataSource, MovieId, Role};
use artpack_imaging::TransformEngine;

use crate::input::{self, RowInput};
use crate::report::{BatchReport, RowOutcome};
use crate::{PipelineError, workspace};

/// Progress events emitted while a batch runs.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// The table was read; `total` data rows will be visited.
    Started { total: usize },
    /// A row with a title is about to be looked up.
    RowStarted { row: usize, title: String },
    /// A row is done.
    RowFinished { row: usize, processed: bool },
}

/// Drives one batch: table rows in, artwork files out.
///
/// Rows are handled one after another, in input order. A row that fails
/// never stops the batch; its outcome is recorded in the returned
/// [`BatchReport`].
pub struct Pipeline<S> {
    source: S,
    engine: TransformEngine,
}

impl<S: MetadataSource> Pipeline<S> {
    pub fn new(source: S, engine: TransformEngine) -> Self {
        Self { source, engine }
    }

    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// Run the batch over a CSV file on disk.
    pub fn run_file(&self, table: &Path, output_root: &Path) -> Result<BatchReport, PipelineError> {
        let file = File::open(table)?;
        self.run(BufReader::new(file), output_root)
    }

    /// Run the batch over a CSV table.
    ///
    /// Fails before touching `output_root` when the table has no title
    /// column. Otherwise returns one outcome per data row.
    pub fn run<R: Read>(&self, table: R, output_root: &Path) -> Result<BatchReport, PipelineError> {
        self.run_with_progress(table, output_root, |_| {})
    }

    /// Like [`run`](Self::run), reporting progress through `on_event`.
    pub fn run_with_progress<R: Read>(
        &self,
        table: R,
        output_root: &Path,
        mut on_event: impl FnMut(BatchEvent),
    ) -> Result<BatchReport, PipelineError> {
        let rows = match input::read_titles(table) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("{}", e);
                return Err(e);
            }
        };

        workspace::ensure_role_dirs(output_root)?;
        on_event(BatchEvent::Started { total: rows.len() });

        let mut report = BatchReport::new();
        for row in rows {
            let outcome = match row.input {
                RowInput::Title(title) => {
                    on_event(BatchEvent::RowStarted {
                        row: row.row,
                        title: title.clone(),
                    });
                    self.process_isolated(title, output_root)
                }
                RowInput::Blank => {
                    log::warn!("Missing movie name in row {}. Skipping row.", row.row);
                    RowOutcome::SkippedEmptyTitle
                }
                RowInput::Malformed(message) => {
                    log::error!("Unreadable row {}: {}. Skipping row.", row.row, message);
                    RowOutcome::Failed {
                        title: None,
                        message,
                    }
                }
            };
            on_event(BatchEvent::RowFinished {
                row: row.row,
                processed: outcome.is_processed(),
            });
            report.add(row.row, outcome);
        }

        log::info!("{}", report.summary());
        Ok(report)
    }

    /// Process one title, turning a panic inside a decoder or encoder into a
    /// failed row instead of an aborted batch.
    fn process_isolated(&self, title: String, output_root: &Path) -> RowOutcome {
        match panic::catch_unwind(AssertUnwindSafe(|| self.process_title(&title, output_root))) {
            Ok(outcome) => outcome,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "processing panicked".to_string());
                log::error!("Error processing \"{}\": {}", title, message);
                RowOutcome::Failed {
                    title: Some(title),
                    message,
                }
            }
        }
    }

    fn process_title(&self, title: &str, output_root: &Path) -> RowOutcome {
        let id = match self.source.resolve(title) {
            Ok(Some(id)) => id,
            Ok(None) => {
                log::error!("Movie ID not found for movie: {}. Skipping.", title);
                return RowOutcome::NotFound {
                    title: title.to_string(),
                    reason: None,
                };
            }
            Err(e) => {
                log::error!("Failed to fetch movie ID for {}: {}", title, e);
                return RowOutcome::NotFound {
                    title: title.to_string(),
                    reason: Some(e.to_string()),
                };
            }
        };

        let assets = match self.source.locate(&id) {
            Ok(assets) if !assets.is_empty() => assets,
            Ok(_) => {
                log::warn!("No images listed for movie ID {} ({})", id, title);
                return no_assets(title, id, None);
            }
            Err(e) => {
                log::error!("Failed to fetch images for movie ID {}: {}", id, e);
                return no_assets(title, id, Some(e.to_string()));
            }
        };

        let mut files = Vec::new();
        let mut warnings = Vec::new();
        for role in Role::ALL {
            let Some(file_path) = assets.for_role(role) else {
                continue;
            };
            self.process_asset(title, role, file_path, output_root, &mut files, &mut warnings);
        }

        RowOutcome::Processed {
            title: title.to_string(),
            id,
            files,
            warnings,
        }
    }

    /// Download one artwork reference and write its variants. Failures are
    /// appended to `warnings` and never affect the other role.
    fn process_asset(
        &self,
        title: &str,
        role: Role,
        file_path: &str,
        output_root: &Path,
        files: &mut Vec<std::path::PathBuf>,
        warnings: &mut Vec<String>,
    ) {
        let bytes = match self.source.fetch_image(file_path) {
            Ok(bytes) => {
                log::info!("Downloaded {} image {}", role, file_path);
                bytes
            }
            Err(e) => {
                log::error!("Failed to download {} image {}: {}", role, file_path, e);
                warnings.push(format!("{} download failed: {}", role, e));
                return;
            }
        };

        match self.engine.transform(&bytes, role, title, output_root) {
            Ok(output) => {
                files.extend(output.written);
                for (path, e) in output.failures {
                    warnings.push(format!("could not write {}: {}", path.display(), e));
                }
            }
            Err(e) => {
                log::error!("Error processing {} image {}: {}", role, file_path, e);
                warnings.push(format!("{} image unusable: {}", role, e));
            }
        }
    }
}

fn no_assets(title: &str, id: MovieId, reason: Option<String>) -> RowOutcome {
    RowOutcome::NoAssets {
        title: title.to_string(),
        id,
        reason,
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
