use serde::{Deserialize, Serialize};

/// CSS pixels per inch.
pub const CSS_DPI: f32 = 96.0;
pub const MM_PER_INCH: f32 = 25.4;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Geometry of one preview page, in CSS pixels.
///
/// A4 at 96 px/in is 794 × 1123 px. With 50 px padding the content box is
/// 694 px wide and 1023 px tall; the latter is the paginator's page height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl PageGeometry {
    pub fn a4() -> Self {
        PageGeometry {
            width: mm_to_px(A4_WIDTH_MM).round(),
            height: mm_to_px(A4_HEIGHT_MM).round(),
            padding: 50.0,
        }
    }

    pub fn content_width(&self) -> f32 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn content_height(&self) -> f32 {
        (self.height - 2.0 * self.padding).max(0.0)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::a4()
    }
}

pub fn mm_to_px(mm: f32) -> f32 {
    mm / MM_PER_INCH * CSS_DPI
}

/// Millimetres to PDF points (1/72 in).
pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_INCH * 72.0
}
