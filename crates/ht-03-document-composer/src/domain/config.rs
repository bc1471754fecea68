//! # Composer Configuration

use std::path::PathBuf;

/// Page dimensions in PDF points (1/72 inch), origin at bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// US Letter, 8.5 x 11 in.
    pub const LETTER: PageSize = PageSize {
        width_pt: 612.0,
        height_pt: 792.0,
    };

    /// ISO A4, 210 x 297 mm.
    pub const A4: PageSize = PageSize {
        width_pt: 595.28,
        height_pt: 841.89,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LETTER
    }
}

/// Configuration for document composition.
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Directory for transient code images and staged photos
    /// (default: system temp dir).
    pub scratch_dir: PathBuf,

    /// Page size (default: US Letter).
    pub page: PageSize,

    /// Pixels per code module in the rasterized code image (default: 10).
    pub module_px: u32,

    /// Blank modules around the code (default: 4, the QR minimum).
    pub quiet_zone: u32,

    /// Body text size in points (default: 12).
    pub font_size: f32,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            scratch_dir: std::env::temp_dir(),
            page: PageSize::LETTER,
            module_px: 10,
            quiet_zone: 4,
            font_size: 12.0,
        }
    }
}

impl ComposerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn with_page(mut self, page: PageSize) -> Self {
        self.page = page;
        self
    }

    pub fn with_module_px(mut self, px: u32) -> Self {
        self.module_px = px.max(1);
        self
    }

    pub fn with_quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone = modules;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}
