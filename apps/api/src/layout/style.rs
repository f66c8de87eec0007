//! Typography shared by the HTML renderer and the layout measurer.
//! Sizes are CSS pixels; the preview CSS is generated from these values.

use crate::layout::font_metrics::FontWeight;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub weight: FontWeight,
}

impl TextStyle {
    const fn new(font_size: f32, line_height: f32, weight: FontWeight) -> Self {
        TextStyle {
            font_size,
            line_height,
            weight,
        }
    }

    /// Height of one line box.
    pub fn line_box(&self) -> f32 {
        self.font_size * self.line_height
    }
}

pub const NAME: TextStyle = TextStyle::new(28.0, 1.2, FontWeight::Bold);
pub const TITLE: TextStyle = TextStyle::new(16.0, 1.4, FontWeight::Regular);
pub const CONTACT: TextStyle = TextStyle::new(11.0, 1.5, FontWeight::Regular);
pub const SECTION_HEADING: TextStyle = TextStyle::new(14.0, 1.4, FontWeight::Bold);
pub const BODY: TextStyle = TextStyle::new(12.0, 1.5, FontWeight::Regular);
pub const ITEM_HEADING: TextStyle = TextStyle::new(13.0, 1.4, FontWeight::Bold);
pub const META: TextStyle = TextStyle::new(11.0, 1.4, FontWeight::Regular);

/// Gap between the header block and the first section.
pub const HEADER_GAP: f32 = 12.0;
pub const HEADER_RULE: f32 = 2.0;
pub const SECTION_GAP: f32 = 18.0;
pub const SECTION_RULE: f32 = 1.0;
/// Space between the section rule and the section body.
pub const SECTION_BODY_GAP: f32 = 6.0;
pub const ITEM_GAP: f32 = 10.0;
/// Bullet glyph offset and highlight text indent.
pub const BULLET_INDENT: f32 = 8.0;
pub const HIGHLIGHT_INDENT: f32 = 22.0;

pub const CONTACT_SEPARATOR: &str = "  |  ";
pub const SKILL_SEPARATOR: &str = ", ";
