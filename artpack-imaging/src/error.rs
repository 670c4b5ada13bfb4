/// Errors that can occur while decoding, resizing, or writing artwork.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("No transform recipes configured")]
    NoRecipes,

    /// The title does not reduce to a plain file name inside the role directory
    #[error("Not a plain file name: {0}")]
    UnsafeFileName(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
