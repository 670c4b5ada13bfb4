use std::time::Duration;

use artpack_core::{AssetRefs, MetadataSource, MovieId, SourceError};

use crate::config::TmdbConfig;
use crate::error::TmdbError;
use crate::types::{ImagesResponse, SearchResponse};

/// Longest slice of a response body kept in errors and logs.
const MAX_BODY_IN_ERROR: usize = 200;

/// Blocking HTTP client for the TMDB v3 API and its image CDN.
pub struct TmdbClient {
    http: reqwest::blocking::Client,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Create a client. No request is made until the first lookup.
    pub fn new(config: TmdbConfig) -> Result<Self, TmdbError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("artpack/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Search movies by title and return the first result's id.
    pub fn search_movie(&self, title: &str) -> Result<Option<MovieId>, TmdbError> {
        let text = self.get_api("/search/movie", &[("query", title)])?;
        let response: SearchResponse = serde_json::from_str(&text)?;
        Ok(response.first_id())
    }

    /// Fetch the first backdrop and first logo for a movie.
    pub fn movie_images(&self, id: &MovieId) -> Result<AssetRefs, TmdbError> {
        let text = self.get_api(&format!("/movie/{}/images", id), &[])?;
        let response: ImagesResponse = serde_json::from_str(&text)?;
        Ok(response.asset_refs())
    }

    /// Download an image from the CDN. Does not need the API key.
    pub fn download_image(&self, file_path: &str) -> Result<Vec<u8>, TmdbError> {
        let url = self.config.image_url(file_path);
        log::debug!("Downloading {}", url);

        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let body = resp.text().unwrap_or_default();
            return Err(TmdbError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(resp.bytes()?.to_vec())
    }

    /// GET an API endpoint and return the body of a 200 response.
    fn get_api(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, TmdbError> {
        let mut query: Vec<(&str, &str)> = vec![("api_key", self.config.api_key.as_str())];
        query.extend_from_slice(params);

        let resp = self
            .http
            .get(self.config.api_url(endpoint))
            .query(&query)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if status != reqwest::StatusCode::OK {
            return Err(TmdbError::Status {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        Ok(text)
    }
}

impl MetadataSource for TmdbClient {
    fn resolve(&self, title: &str) -> Result<Option<MovieId>, SourceError> {
        Ok(self.search_movie(title)?)
    }

    fn locate(&self, id: &MovieId) -> Result<AssetRefs, SourceError> {
        Ok(self.movie_images(id)?)
    }

    fn fetch_image(&self, file_path: &str) -> Result<Vec<u8>, SourceError> {
        Ok(self.download_image(file_path)?)
    }
}

/// Shorten a response body for error messages without splitting a character.
pub(crate) fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_BODY_IN_ERROR {
        body.to_string()
    } else {
        let mut short: String = body.chars().take(MAX_BODY_IN_ERROR).collect();
        short.push_str("...");
        short
    }
}
