use super::*;
use crate::DEFAULT_RECIPES;

#[test]
fn test_sanitize_replaces_spaces() {
    assert_eq!(sanitize_title("The Dark Knight"), "The_Dark_Knight");
}

#[test]
fn test_sanitize_leaves_other_characters() {
    assert_eq!(sanitize_title("Amélie: Part/2"), "Amélie:_Part/2");
}

#[test]
fn test_sanitize_collision() {
    assert_eq!(sanitize_title("A B"), sanitize_title("A_B"));
}

#[test]
fn test_backdrop_file_name_has_size() {
    let name = output_file_name("Blade Runner", Role::Backdrop, &DEFAULT_RECIPES[1]);
    assert_eq!(name, "Blade_Runner_800x450.png");
}

#[test]
fn test_backdrop_webp_extension() {
    let name = output_file_name("Up", Role::Backdrop, &DEFAULT_RECIPES[3]);
    assert_eq!(name, "Up_640x360.webp");
}

#[test]
fn test_logo_file_name_has_no_size() {
    let name = output_file_name("Blade Runner", Role::Logos, &DEFAULT_RECIPES[0]);
    assert_eq!(name, "Blade_Runner.png");
}

#[test]
fn test_default_recipes_table() {
    let sizes: Vec<String> = DEFAULT_RECIPES.iter().map(|r| r.size_label()).collect();
    assert_eq!(sizes, vec!["240x135", "800x450", "1280x480", "640x360"]);
    let overlays: Vec<bool> = DEFAULT_RECIPES.iter().map(|r| r.add_logo_overlay).collect();
    assert_eq!(overlays, vec![false, false, true, false]);
    assert_eq!(DEFAULT_RECIPES[3].format, ImageFormat::Webp);
}

#[test]
fn test_role_dir_names() {
    assert_eq!(Role::Backdrop.dir_name(), "backdrop");
    assert_eq!(Role::Logos.dir_name(), "logos");
    assert_eq!(Role::ALL, [Role::Backdrop, Role::Logos]);
}
