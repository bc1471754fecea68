//! # PDF Page Renderer
//!
//! Renders a `PageLayout` onto a single PDF page with `printpdf`. Text uses
//! the built-in Helvetica face. Images are decoded with `image`, flattened to
//! RGB and scaled into their layout box.
//!
//! The document is written to a hidden sibling temp file and renamed over the
//! destination, so a failed render never leaves a partial PDF behind.

use crate::domain::errors::RenderError;
use crate::domain::layout::{LayoutElement, PageLayout};
use crate::ports::outbound::PageRenderer;
use image::DynamicImage;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt,
};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Resolution at which one image pixel maps to one point before scaling.
const IMAGE_DPI: f32 = 72.0;

/// `PageRenderer` producing PDF files.
#[derive(Debug, Clone)]
pub struct PdfPageRenderer {
    title: String,
}

impl Default for PdfPageRenderer {
    fn default() -> Self {
        Self::new("Hall Ticket")
    }
}

impl PdfPageRenderer {
    /// Renderer stamping `title` into the document metadata.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn backend(err: printpdf::Error) -> RenderError {
        RenderError::Backend(err.to_string())
    }

    fn load_image(source: &Path) -> Result<DynamicImage, RenderError> {
        let decode_err = |reason: String| RenderError::ImageDecode {
            source_name: source.display().to_string(),
            reason,
        };

        let decoded = image::io::Reader::open(source)
            .map_err(|e| decode_err(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| decode_err(e.to_string()))?
            .decode()
            .map_err(|e| decode_err(e.to_string()))?;

        // printpdf embeds alpha poorly; flatten every source to RGB
        Ok(DynamicImage::ImageRgb8(decoded.to_rgb8()))
    }

    fn draw(
        layer: &PdfLayerReference,
        font: &IndirectFontRef,
        element: &LayoutElement,
    ) -> Result<(), RenderError> {
        match element {
            LayoutElement::Text {
                x_pt,
                y_pt,
                size_pt,
                content,
            } => {
                layer.use_text(
                    content.clone(),
                    *size_pt,
                    Mm::from(Pt(*x_pt)),
                    Mm::from(Pt(*y_pt)),
                    font,
                );
            }
            LayoutElement::Image {
                x_pt,
                y_pt,
                width_pt,
                height_pt,
                source,
                ..
            } => {
                let decoded = Self::load_image(source)?;
                let (px_w, px_h) = (decoded.width().max(1), decoded.height().max(1));
                Image::from_dynamic_image(&decoded).add_to_layer(
                    layer.clone(),
                    ImageTransform {
                        translate_x: Some(Mm::from(Pt(*x_pt))),
                        translate_y: Some(Mm::from(Pt(*y_pt))),
                        scale_x: Some(width_pt / px_w as f32),
                        scale_y: Some(height_pt / px_h as f32),
                        dpi: Some(IMAGE_DPI),
                        ..Default::default()
                    },
                );
            }
        }
        Ok(())
    }
}

impl PageRenderer for PdfPageRenderer {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, layout: &PageLayout, destination: &Path) -> Result<(), RenderError> {
        let parent = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let write_err = |reason: String| RenderError::WriteFailed {
            path: destination.to_path_buf(),
            reason,
        };

        let (doc, page, layer) = PdfDocument::new(
            self.title.as_str(),
            Mm::from(Pt(layout.page.width_pt)),
            Mm::from(Pt(layout.page.height_pt)),
            "Ticket",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(Self::backend)?;
        let current = doc.get_page(page).get_layer(layer);

        for element in &layout.elements {
            Self::draw(&current, &font, element)?;
        }

        let mut staged = tempfile::Builder::new()
            .prefix(".ht-")
            .suffix(".pdf.partial")
            .tempfile_in(parent)
            .map_err(|e| write_err(e.to_string()))?;
        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            doc.save(&mut writer).map_err(Self::backend)?;
            writer.flush().map_err(|e| write_err(e.to_string()))?;
        }
        staged
            .as_file()
            .sync_all()
            .map_err(|e| write_err(e.to_string()))?;
        staged
            .persist(destination)
            .map_err(|e| write_err(e.error.to_string()))?;

        tracing::debug!(
            "[ht-03] Rendered {} elements to {}",
            layout.elements.len(),
            destination.display()
        );
        Ok(())
    }
}
