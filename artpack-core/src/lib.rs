pub mod error;
pub mod movie;
pub mod recipe;
pub mod role;
pub mod source;
pub mod util;

pub use error::SourceError;
pub use movie::{AssetRefs, MovieId, ResolvedMovie};
pub use recipe::{DEFAULT_RECIPES, ImageFormat, TransformRecipe};
pub use role::Role;
pub use source::MetadataSource;
pub use util::{output_file_name, sanitize_title};
