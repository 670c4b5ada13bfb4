use std::fs;
use std::path::{Component, Path, PathBuf};

use image::DynamicImage;
use image::imageops::FilterType;

use artpack_core::{DEFAULT_RECIPES, ImageFormat, Role, TransformRecipe, output_file_name};

use crate::TransformError;

/// Turns one downloaded image into the output files for its role.
///
/// The recipe list is fixed when the engine is built. Backdrops get one file
/// per recipe; logos are re-encoded once with the first recipe's format.
#[derive(Debug, Clone)]
pub struct TransformEngine {
    recipes: Vec<TransformRecipe>,
    filter: FilterType,
}

impl TransformEngine {
    /// Build an engine over an ordered recipe list. The list must not be empty.
    pub fn new(recipes: Vec<TransformRecipe>) -> Result<Self, TransformError> {
        if recipes.is_empty() {
            return Err(TransformError::NoRecipes);
        }
        Ok(Self {
            recipes,
            filter: FilterType::Lanczos3,
        })
    }

    /// Engine over [`DEFAULT_RECIPES`].
    pub fn with_default_recipes() -> Self {
        Self {
            recipes: DEFAULT_RECIPES.to_vec(),
            filter: FilterType::Lanczos3,
        }
    }

    pub fn recipes(&self) -> &[TransformRecipe] {
        &self.recipes
    }

    /// Number of files one image of `role` produces.
    pub fn outputs_per_image(&self, role: Role) -> usize {
        match role {
            Role::Backdrop => self.recipes.len(),
            Role::Logos => 1,
        }
    }

    /// Decode `bytes` and write every variant for `role` under
    /// `<output_root>/<role>/`.
    ///
    /// A decode failure writes nothing and is returned as an error. Once the
    /// image is decoded, each variant succeeds or fails on its own: failed
    /// variants are listed in [`TransformOutput::failures`] and the rest are
    /// still written.
    pub fn transform(
        &self,
        bytes: &[u8],
        role: Role,
        title: &str,
        output_root: &Path,
    ) -> Result<TransformOutput, TransformError> {
        let image = image::load_from_memory(bytes)?;
        let role_dir = output_root.join(role.dir_name());
        fs::create_dir_all(&role_dir)?;

        let mut output = TransformOutput::default();
        match role {
            Role::Logos => {
                let recipe = &self.recipes[0];
                match output_path(&role_dir, title, role, recipe) {
                    Ok(path) => output.record(encode(&image, recipe.format, &path), path, role),
                    Err((name, e)) => output.record(Err(e), name, role),
                }
            }
            Role::Backdrop => {
                for recipe in &self.recipes {
                    let path = match output_path(&role_dir, title, role, recipe) {
                        Ok(path) => path,
                        Err((name, e)) => {
                            output.record(Err(e), name, role);
                            continue;
                        }
                    };
                    // Stretch to the exact size; no crop or letterbox.
                    let resized = image.resize_exact(recipe.width, recipe.height, self.filter);
                    output.record(encode(&resized, recipe.format, &path), path, role);
                }
            }
        }

        Ok(output)
    }
}

/// Files produced from one source image.
#[derive(Debug, Default)]
pub struct TransformOutput {
    /// Written paths, in recipe order
    pub written: Vec<PathBuf>,
    /// Variants that could not be written, with the reason
    pub failures: Vec<(PathBuf, TransformError)>,
}

impl TransformOutput {
    fn record(&mut self, result: Result<(), TransformError>, path: PathBuf, role: Role) {
        match result {
            Ok(()) => {
                log::info!("Saved {} image to {}", role, path.display());
                self.written.push(path);
            }
            Err(e) => {
                log::error!("Failed to write {}: {}", path.display(), e);
                self.failures.push((path, e));
            }
        }
    }
}

/// Full path for one variant. The file name must be a single normal path
/// component so a title can never point outside `role_dir`.
fn output_path(
    role_dir: &Path,
    title: &str,
    role: Role,
    recipe: &TransformRecipe,
) -> Result<PathBuf, (PathBuf, TransformError)> {
    let name = output_file_name(title, role, recipe);
    let mut components = Path::new(&name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if plain {
        Ok(role_dir.join(name))
    } else {
        Err((PathBuf::from(&name), TransformError::UnsafeFileName(name)))
    }
}

/// Write `image` to `path` in `format`.
///
/// Pixels are normalized to 8-bit first since the WebP and JPEG encoders
/// reject other layouts.
fn encode(image: &DynamicImage, format: ImageFormat, path: &Path) -> Result<(), TransformError> {
    let normalized = if format.supports_alpha() {
        DynamicImage::ImageRgba8(image.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
    };
    normalized.save_with_format(path, encoder_format(format))?;
    Ok(())
}

fn encoder_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Webp => image::ImageFormat::WebP,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
