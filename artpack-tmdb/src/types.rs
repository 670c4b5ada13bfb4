use serde::Deserialize;

use artpack_core::{AssetRefs, MovieId};

/// Response of `GET /search/movie`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl SearchResponse {
    /// Identifier of the first result. No ranking by year or popularity.
    pub fn first_id(&self) -> Option<MovieId> {
        self.results.first().and_then(|r| r.id).map(MovieId::from)
    }
}

/// Response of `GET /movie/{id}/images`.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub backdrops: Vec<ImageEntry>,
    #[serde(default)]
    pub logos: Vec<ImageEntry>,
    #[serde(default)]
    pub posters: Vec<ImageEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ImageEntry {
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub iso_639_1: Option<String>,
}

impl ImagesResponse {
    /// Take the first backdrop and first logo, in service order.
    pub fn asset_refs(&self) -> AssetRefs {
        AssetRefs {
            backdrop: first_path(&self.backdrops),
            logo: first_path(&self.logos),
        }
    }
}

fn first_path(entries: &[ImageEntry]) -> Option<String> {
    entries.first().and_then(|e| e.file_path.clone())
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
