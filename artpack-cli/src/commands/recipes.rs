use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use artpack_lib::DEFAULT_RECIPES;

/// Print the fixed recipe table.
pub(crate) fn run_recipes() {
    log::info!(
        "{}",
        "Backdrop recipes".if_supports_color(Stdout, |t| t.bold()),
    );
    for (i, recipe) in DEFAULT_RECIPES.iter().enumerate() {
        let overlay = if recipe.add_logo_overlay {
            " (logo overlay: not applied)"
        } else {
            ""
        };
        log::info!(
            "  {}. {} {}{}",
            i + 1,
            recipe.size_label().if_supports_color(Stdout, |t| t.cyan()),
            recipe.format,
            overlay.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");
    log::info!(
        "Logos are re-encoded once as {} at their original size.",
        DEFAULT_RECIPES[0].format
    );
}
