//! Image asset lookup for scenes.
//!
//! Scene data references images by relative path. Lookup tries the
//! path as given, then under the `Images/` directory, then by its
//! basename under `Images/`, all relative to an assets root; anything
//! unresolvable falls back to the default sentinel so the presentation
//! layer always gets a usable path.

use std::path::Path;

use tracing::warn;

/// Sentinel image used whenever a scene's own image cannot be found.
pub const DEFAULT_IMAGE: &str = "Images/default.jpg";

/// Directory searched for images referenced by bare file name.
pub const IMAGES_DIR: &str = "Images";

/// Check whether a path carries an accepted image extension
/// (case-insensitive `.jpg` / `.jpeg`).
pub fn has_image_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

/// Resolve a relative image path against `root`.
///
/// Returns the first of: the path as given, the path under
/// [`IMAGES_DIR`], its basename under [`IMAGES_DIR`] — whichever
/// exists on disk — or [`DEFAULT_IMAGE`]. Stateless.
pub fn resolve_image(root: &Path, relative: &str) -> String {
    if relative.is_empty() {
        return DEFAULT_IMAGE.to_string();
    }

    if root.join(relative).is_file() {
        return relative.to_string();
    }

    let in_images = Path::new(IMAGES_DIR).join(relative);
    if root.join(&in_images).is_file() {
        return in_images.to_string_lossy().into_owned();
    }

    if let Some(name) = Path::new(relative).file_name() {
        let by_name = Path::new(IMAGES_DIR).join(name);
        if root.join(&by_name).is_file() {
            return by_name.to_string_lossy().into_owned();
        }
    }

    warn!(image = %relative, "image not found, using default");
    DEFAULT_IMAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn assets_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(IMAGES_DIR)).unwrap();
        fs::write(dir.path().join("cover.jpg"), b"jpg").unwrap();
        fs::write(dir.path().join("Images/cellar.jpg"), b"jpg").unwrap();
        dir
    }

    #[test]
    fn accepts_jpg_and_jpeg_any_case() {
        assert!(has_image_extension("a.jpg"));
        assert!(has_image_extension("a.JPEG"));
        assert!(has_image_extension("dir/a.Jpg"));
        assert!(!has_image_extension("a.png"));
        assert!(!has_image_extension("a"));
    }

    #[test]
    fn direct_path_is_returned_unchanged() {
        let dir = assets_root();
        assert_eq!(resolve_image(dir.path(), "cover.jpg"), "cover.jpg");
    }

    #[test]
    fn falls_back_to_images_directory() {
        let dir = assets_root();
        assert_eq!(
            resolve_image(dir.path(), "cellar.jpg"),
            Path::new(IMAGES_DIR).join("cellar.jpg").to_string_lossy()
        );
    }

    #[test]
    fn basename_is_tried_under_images() {
        let dir = assets_root();
        assert_eq!(
            resolve_image(dir.path(), "somewhere/else/cellar.jpg"),
            Path::new(IMAGES_DIR).join("cellar.jpg").to_string_lossy()
        );
    }

    #[test]
    fn unresolvable_path_yields_sentinel() {
        let dir = assets_root();
        assert_eq!(resolve_image(dir.path(), "missing.jpg"), DEFAULT_IMAGE);
        assert_eq!(resolve_image(dir.path(), ""), DEFAULT_IMAGE);
    }
}
