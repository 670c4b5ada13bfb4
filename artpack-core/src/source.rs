use crate::{AssetRefs, MovieId, SourceError};

/// The external metadata service, seen as three read-only lookups.
///
/// The batch pipeline only talks to this trait, so tests and alternative
/// backends can stand in for the real HTTP client.
pub trait MetadataSource {
    /// Search by title and return the first match, or `None` when the
    /// service had no results.
    fn resolve(&self, title: &str) -> Result<Option<MovieId>, SourceError>;

    /// Fetch the artwork references for a resolved movie.
    fn locate(&self, id: &MovieId) -> Result<AssetRefs, SourceError>;

    /// Download the raw bytes behind an artwork reference.
    fn fetch_image(&self, file_path: &str) -> Result<Vec<u8>, SourceError>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn resolve(&self, title: &str) -> Result<Option<MovieId>, SourceError> {
        (**self).resolve(title)
    }

    fn locate(&self, id: &MovieId) -> Result<AssetRefs, SourceError> {
        (**self).locate(id)
    }

    fn fetch_image(&self, file_path: &str) -> Result<Vec<u8>, SourceError> {
        (**self).fetch_image(file_path)
    }
}
