//! PNG export of a finished circuit pattern

use crate::io::error::{CircuitError, Result, file_system_error};
use crate::io::raster::LevelRaster;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Colours used when rendering a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour of drawn paths
    pub circuit: [u8; 4],
    /// Background colour
    pub background: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        use crate::io::configuration::{BACKGROUND_COLOR, CIRCUIT_COLOR};
        Self {
            circuit: CIRCUIT_COLOR,
            background: BACKGROUND_COLOR,
        }
    }
}

/// Render every pixel drawn at or before `level`
pub fn render_up_to_level(raster: &LevelRaster, palette: Palette, level: u32) -> RgbaImage {
    let layout = raster.layout();
    let mut img = ImageBuffer::from_pixel(layout.width, layout.height, Rgba(palette.background));

    for (x, y, drawn_at) in raster.drawn() {
        if drawn_at <= level {
            img.put_pixel(x, y, Rgba(palette.circuit));
        }
    }

    img
}

/// Create the parent directory of `output_path` if needed
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    Ok(())
}

/// Export the complete pattern as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - Nothing has been drawn on the raster
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_pattern_as_png(
    raster: &LevelRaster,
    palette: Palette,
    output_path: &Path,
) -> Result<()> {
    let deepest = raster
        .deepest_level()
        .ok_or_else(|| CircuitError::NothingToRender {
            reason: "No segments have been drawn".to_string(),
        })?;

    let img = render_up_to_level(raster, palette, deepest);

    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| CircuitError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
