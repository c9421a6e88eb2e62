//! Animated GIF of the growth, one frame per level

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{CircuitError, Result, file_system_error};
use crate::io::image::{Palette, ensure_parent_dir, render_up_to_level};
use crate::io::raster::LevelRaster;
use image::{Delay, Frame};
use std::path::Path;

/// Build the animation frames for `raster`
///
/// Frame `k` shows everything drawn up to level `k`. Delays below what
/// viewers reliably honour are raised to [`VIEWER_MIN_FRAME_DELAY_MS`], and
/// the completed pattern is held for [`FINAL_FRAME_HOLD`] frame delays,
/// saturating at `u32::MAX` milliseconds.
///
/// # Errors
///
/// Returns `NothingToRender` if nothing has been drawn
pub fn build_frames(
    raster: &LevelRaster,
    palette: Palette,
    frame_delay_ms: u32,
) -> Result<Vec<Frame>> {
    let deepest = raster
        .deepest_level()
        .ok_or_else(|| CircuitError::NothingToRender {
            reason: "No segments captured for visualization".to_string(),
        })?;

    let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
    let mut frames: Vec<Frame> = (0..=deepest)
        .map(|level| {
            Frame::from_parts(
                render_up_to_level(raster, palette, level),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            )
        })
        .collect();

    if let Some(last) = frames.last().map(|frame| frame.buffer().clone()) {
        frames.push(Frame::from_parts(
            last,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms.saturating_mul(FINAL_FRAME_HOLD), 1),
        ));
    }

    Ok(frames)
}

/// Export the growth of `raster` as an animated GIF
///
/// # Errors
///
/// Returns an error if:
/// - Nothing has been drawn on the raster
/// - File system operations fail
/// - GIF encoding fails
pub fn export_growth_gif(
    raster: &LevelRaster,
    palette: Palette,
    output_path: &Path,
    frame_delay_ms: u32,
) -> Result<()> {
    let frames = build_frames(raster, palette, frame_delay_ms)?;

    ensure_parent_dir(output_path)?;

    let file = std::fs::File::create(output_path)
        .map_err(|e| file_system_error(output_path, "create file", e))?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|e| CircuitError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
