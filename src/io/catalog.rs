//! Images directory lookup and listing

use std::path::{Path, PathBuf};

use crate::io::error::{FractalError, Result, WithPath};

/// Sorted list of regular files in the images directory
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "list images")? {
        let path = entry.with_path(dir, "list images")?.path();
        if path.is_file() {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Human-readable listing of the images directory, one file name per line
///
/// An unreadable directory is reported in the text rather than as an error.
pub fn describe_images(dir: &Path) -> String {
    match list_images(dir) {
        Ok(images) if images.is_empty() => {
            format!("No images found in {}", dir.display())
        }
        Ok(images) => {
            let names: Vec<String> = images
                .iter()
                .filter_map(|path| path.file_name())
                .map(|name| format!("  {}", name.to_string_lossy()))
                .collect();
            format!(
                "Images available in {}:\n{}",
                dir.display(),
                names.join("\n")
            )
        }
        Err(e) => format!("Images directory unavailable: {e}"),
    }
}

/// Resolve an image name against the images directory
///
/// Absolute names are used unchanged.
///
/// # Errors
///
/// Returns an error if no regular file exists at the resolved path
pub fn resolve_image(images_dir: &Path, name: &Path) -> Result<PathBuf> {
    let path = images_dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(FractalError::ImageNotFound { path })
    }
}
