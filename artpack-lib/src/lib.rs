//! Batch pipeline, archiving, and workspace handling for artpack.
//!
//! The intended call order for one job is
//! [`workspace::clear`] → [`Pipeline::run`] → [`archive::archive_today`].

pub mod archive;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod workspace;

pub use archive::{ArchiveSummary, archive, archive_file_name, archive_today};
pub use error::{ArchiveError, PipelineError};
pub use input::{InputRow, RowInput, TITLE_COLUMN};
pub use pipeline::{BatchEvent, Pipeline};
pub use report::{BatchReport, BatchSummary, RowOutcome, RowReport};
pub use workspace::ClearSummary;

pub use artpack_core::{
    AssetRefs, DEFAULT_RECIPES, ImageFormat, MetadataSource, MovieId, Role, SourceError,
    TransformRecipe,
};
pub use artpack_imaging::{TransformEngine, TransformError};
