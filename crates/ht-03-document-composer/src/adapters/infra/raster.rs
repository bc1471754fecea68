//! # Code Rasterizer
//!
//! Draws a `CodeMatrix` as a black-on-white PNG with a quiet zone.

use crate::domain::code::CodeMatrix;
use crate::domain::errors::RenderError;
use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rasterize `matrix` to an in-memory grayscale image.
pub fn rasterize(matrix: &CodeMatrix, module_px: u32, quiet_zone: u32) -> GrayImage {
    let module_px = module_px.max(1);
    let modules = matrix.width() as u32 + 2 * quiet_zone;
    let side = modules * module_px;

    GrayImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / module_px, y / module_px);
        if mx < quiet_zone || my < quiet_zone {
            return LIGHT;
        }
        if matrix.is_dark((mx - quiet_zone) as usize, (my - quiet_zone) as usize) {
            DARK
        } else {
            LIGHT
        }
    })
}

/// Rasterize `matrix` and write it as PNG to `destination`.
pub fn write_code_png(
    matrix: &CodeMatrix,
    module_px: u32,
    quiet_zone: u32,
    destination: &Path,
) -> Result<(), RenderError> {
    rasterize(matrix, module_px, quiet_zone)
        .save_with_format(destination, ImageFormat::Png)
        .map_err(|e| RenderError::WriteFailed {
            path: destination.to_path_buf(),
            reason: e.to_string(),
        })
}
