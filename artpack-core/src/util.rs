use crate::{ImageFormat, Role, TransformRecipe};

/// Make a title usable as a file stem by replacing spaces with underscores.
///
/// Nothing else is escaped, so distinct titles can collide (`"A B"` and
/// `"A_B"`); the later write wins.
pub fn sanitize_title(title: &str) -> String {
    title.replace(' ', "_")
}

/// File name for one output image.
///
/// Backdrops carry a `_<w>x<h>` suffix so every recipe gets its own file.
/// Logos are written once and take no size suffix.
pub fn output_file_name(title: &str, role: Role, recipe: &TransformRecipe) -> String {
    let stem = sanitize_title(title);
    match role {
        Role::Backdrop => format!(
            "{}_{}.{}",
            stem,
            recipe.size_label(),
            recipe.format.extension()
        ),
        Role::Logos => logo_file_name(&stem, recipe.format),
    }
}

fn logo_file_name(stem: &str, format: ImageFormat) -> String {
    format!("{}.{}", stem, format.extension())
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
