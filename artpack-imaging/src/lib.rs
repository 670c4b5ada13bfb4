pub mod engine;
pub mod error;

pub use engine::{TransformEngine, TransformOutput};
pub use error::TransformError;
