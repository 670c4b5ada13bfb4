use std::fmt;

/// Output encodings supported by the transform engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Webp,
    Jpeg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// Whether the format can store an alpha channel.
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, ImageFormat::Jpeg)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One output variant: exact pixel size plus encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformRecipe {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    /// Marks the variant meant to carry the movie logo on top of the
    /// backdrop. Compositing is not implemented; the flag is carried as-is.
    pub add_logo_overlay: bool,
}

impl TransformRecipe {
    pub const fn new(width: u32, height: u32, format: ImageFormat) -> Self {
        Self {
            width,
            height,
            format,
            add_logo_overlay: false,
        }
    }

    pub const fn with_logo_overlay(mut self) -> Self {
        self.add_logo_overlay = true;
        self
    }

    /// Size label used in file names, e.g. `800x450`.
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// The fixed recipe table: two aspect ratios, two encodings.
pub const DEFAULT_RECIPES: [TransformRecipe; 4] = [
    TransformRecipe::new(240, 135, ImageFormat::Png),
    TransformRecipe::new(800, 450, ImageFormat::Png),
    TransformRecipe::new(1280, 480, ImageFormat::Png).with_logo_overlay(),
    TransformRecipe::new(640, 360, ImageFormat::Webp),
];
