//! PNG export of rendered patterns

use crate::io::error::{PatternError, Result};
use image::RgbaImage;
use log::info;
use std::path::Path;

/// Save the image as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PatternError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    info!(
        "Wrote {}x{} pattern to {}",
        image.width(),
        image.height(),
        output_path.display()
    );
    Ok(())
}
