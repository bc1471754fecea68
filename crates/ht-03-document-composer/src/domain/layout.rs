//! # Page Layout
//!
//! Fixed hall ticket geometry, in points from the bottom-left corner
//! (`W` = page width, `H` = page height):
//!
//! | Element | Position | Size |
//! |---------|----------|------|
//! | Field lines | x=200, y = H-100, H-115, H-130, H-145 | body text |
//! | Photo | (50, H-150) | 100 x 100 |
//! | Scannable code | (W-150, H-150) | 100 x 100 |
//! | Schedule heading | (W/2-75, H/2+50) | body text |
//! | Schedule item `i` | (W/2-75, H/2+50 - 15i) | body text |

use crate::domain::config::PageSize;
use shared_types::CandidateFields;
use std::path::{Path, PathBuf};

const FIELD_X: f32 = 200.0;
const FIELD_TOP: f32 = 100.0;
const LINE_STEP: f32 = 15.0;
const IMAGE_SIDE: f32 = 100.0;
const IMAGE_TOP: f32 = 150.0;
const PHOTO_X: f32 = 50.0;
const SCHEDULE_INDENT: f32 = 75.0;
const SCHEDULE_RAISE: f32 = 50.0;

pub const SCHEDULE_HEADING: &str = "Exam Schedule:";

/// What an image element shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Photo,
    Code,
}

/// One positioned element. `(x_pt, y_pt)` is the element's bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text {
        x_pt: f32,
        y_pt: f32,
        size_pt: f32,
        content: String,
    },
    Image {
        x_pt: f32,
        y_pt: f32,
        width_pt: f32,
        height_pt: f32,
        role: ImageRole,
        source: PathBuf,
    },
}

/// Backend-neutral description of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page: PageSize,
    pub elements: Vec<LayoutElement>,
}

impl PageLayout {
    pub fn new(page: PageSize) -> Self {
        Self {
            page,
            elements: Vec::new(),
        }
    }

    /// Lay out a hall ticket.
    ///
    /// `photo` is omitted from the page when `None`. `schedule_lines` are
    /// printed in order beneath the heading.
    pub fn hall_ticket(
        page: PageSize,
        font_size: f32,
        fields: &CandidateFields,
        photo: Option<&Path>,
        code_image: &Path,
        schedule_lines: &[String],
    ) -> Self {
        let mut layout = Self::new(page);
        let (width, height) = (page.width_pt, page.height_pt);

        let field_lines = [
            format!("Roll Number: {}", fields.roll_number),
            format!("Name: {}", fields.name),
            format!("DOB: {}", fields.date_of_birth),
            format!("College: {}", fields.college_name),
        ];
        for (i, line) in field_lines.into_iter().enumerate() {
            layout.push_text(
                FIELD_X,
                height - FIELD_TOP - LINE_STEP * i as f32,
                font_size,
                line,
            );
        }

        if let Some(photo) = photo {
            layout.push_image(PHOTO_X, height - IMAGE_TOP, ImageRole::Photo, photo);
        }
        layout.push_image(
            width - IMAGE_TOP,
            height - IMAGE_TOP,
            ImageRole::Code,
            code_image,
        );

        let schedule_x = width / 2.0 - SCHEDULE_INDENT;
        let schedule_top = height / 2.0 + SCHEDULE_RAISE;
        layout.push_text(schedule_x, schedule_top, font_size, SCHEDULE_HEADING);
        for (i, line) in schedule_lines.iter().enumerate() {
            layout.push_text(
                schedule_x,
                schedule_top - LINE_STEP * (i + 1) as f32,
                font_size,
                line.clone(),
            );
        }

        layout
    }

    pub fn push_text(&mut self, x_pt: f32, y_pt: f32, size_pt: f32, content: impl Into<String>) {
        self.elements.push(LayoutElement::Text {
            x_pt,
            y_pt,
            size_pt,
            content: content.into(),
        });
    }

    fn push_image(&mut self, x_pt: f32, y_pt: f32, role: ImageRole, source: &Path) {
        self.elements.push(LayoutElement::Image {
            x_pt,
            y_pt,
            width_pt: IMAGE_SIDE,
            height_pt: IMAGE_SIDE,
            role,
            source: source.to_path_buf(),
        });
    }

    /// Text contents in layout order.
    pub fn texts(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                LayoutElement::Text { content, .. } => Some(content.as_str()),
                LayoutElement::Image { .. } => None,
            })
            .collect()
    }

    /// Source of the first image with the given role.
    pub fn image(&self, wanted: ImageRole) -> Option<&Path> {
        self.elements.iter().find_map(|element| match element {
            LayoutElement::Image { role, source, .. } if *role == wanted => Some(source.as_path()),
            _ => None,
        })
    }
}
