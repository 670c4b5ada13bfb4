use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a movie in the metadata service.
///
/// TMDB hands out integers, but nothing downstream relies on that: the id is
/// only ever formatted back into a request URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A title that was successfully matched to a service record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMovie {
    /// Title exactly as it appeared in the input table
    pub title: String,
    pub id: MovieId,
}

/// Artwork references for a movie, as service-relative file paths.
///
/// Each field holds the first entry the service listed for that category;
/// the service's ordering is taken as its ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRefs {
    pub backdrop: Option<String>,
    pub logo: Option<String>,
}

impl AssetRefs {
    pub fn is_empty(&self) -> bool {
        self.backdrop.is_none() && self.logo.is_none()
    }

    /// Reference for the given output role, if the service had one.
    pub fn for_role(&self, role: crate::Role) -> Option<&str> {
        match role {
            crate::Role::Backdrop => self.backdrop.as_deref(),
            crate::Role::Logos => self.logo.as_deref(),
        }
    }
}
