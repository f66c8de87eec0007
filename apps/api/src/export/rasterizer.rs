//! Rasterization: turns a laid-out document into a self-contained snapshot.
//!
//! Carried in `AppState` as `Arc<dyn Rasterizer>`. The default
//! `VectorRasterizer` draws the layout into a PDF form XObject content stream
//! in CSS-pixel coordinates, so the assembler can place the same drawing on
//! every page at a different offset.

use async_trait::async_trait;
use pdf_writer::{Content, Name, Str};
use tracing::debug;

use crate::export::ExportError;
use crate::layout::font_metrics::FontWeight;
use crate::layout::measure::{DocumentLayout, LayoutElement};
use crate::layout::page::PageGeometry;
use crate::render::templates::BaseFonts;

/// Resource names the snapshot content stream refers to.
pub const REGULAR_FONT: Name<'static> = Name(b"F1");
pub const BOLD_FONT: Name<'static> = Name(b"F2");

/// The rasterized container.
///
/// `css_width` × `css_height` is the container in CSS pixels (page padding
/// included); `pixel_width` × `pixel_height` is that size at `scale`, the
/// dimensions a bitmap capture would have.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub scale: f32,
    pub fonts: BaseFonts,
    /// Content stream drawn in a `[0 0 css_width css_height]` box, y up.
    pub content: Vec<u8>,
}

impl Snapshot {
    /// Height of the snapshot when scaled to `target_width` (any unit).
    pub fn height_at_width(&self, target_width: f32) -> f32 {
        self.pixel_height as f32 * target_width / self.pixel_width as f32
    }
}

#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(
        &self,
        layout: DocumentLayout,
        page: PageGeometry,
        scale: f32,
    ) -> Result<Snapshot, ExportError>;
}

/// Default rasterizer: draws vector content. CPU-bound, so it runs inside
/// `spawn_blocking`.
pub struct VectorRasterizer;

#[async_trait]
impl Rasterizer for VectorRasterizer {
    async fn rasterize(
        &self,
        layout: DocumentLayout,
        page: PageGeometry,
        scale: f32,
    ) -> Result<Snapshot, ExportError> {
        tokio::task::spawn_blocking(move || draw_snapshot(&layout, &page, scale)).await?
    }
}

/// CSS size of the rasterized container: the page width, and the content
/// height plus padding above and below.
pub fn container_size(content_height: f32, page: &PageGeometry) -> (f32, f32) {
    (page.width, content_height + 2.0 * page.padding)
}

/// Pixel size of a capture of `css_width` × `css_height` at `scale`.
pub fn pixel_size(css_width: f32, css_height: f32, scale: f32) -> (u32, u32) {
    (
        (css_width * scale).round() as u32,
        (css_height * scale).round() as u32,
    )
}

/// Draws the whole container (page padding around the layout) into a snapshot.
pub fn draw_snapshot(
    layout: &DocumentLayout,
    page: &PageGeometry,
    scale: f32,
) -> Result<Snapshot, ExportError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::Rasterize(format!("invalid scale {scale}")));
    }

    let (css_width, css_height) = container_size(layout.content_height, page);
    let (pixel_width, pixel_height) = pixel_size(css_width, css_height, scale);
    if pixel_width == 0 || pixel_height == 0 {
        return Err(ExportError::EmptySnapshot {
            width: pixel_width,
            height: pixel_height,
        });
    }

    let mut content = Content::new();

    content.set_fill_rgb(1.0, 1.0, 1.0);
    content.rect(0.0, 0.0, css_width, css_height);
    content.fill_nonzero();

    // Layout y grows down from the content box; PDF y grows up from the bottom.
    let to_pdf_y = |y: f32| css_height - page.padding - y;

    for element in &layout.elements {
        match element {
            LayoutElement::Text(run) => {
                let font = match run.weight {
                    FontWeight::Regular => REGULAR_FONT,
                    FontWeight::Bold => BOLD_FONT,
                };
                let (r, g, b) = run.color.to_unit();
                let encoded = encode_win_ansi(&run.text);
                content.set_fill_rgb(r, g, b);
                content.begin_text();
                content.set_font(font, run.font_size);
                content.next_line(page.padding + run.x, to_pdf_y(run.baseline()));
                content.show(Str(&encoded));
                content.end_text();
            }
            LayoutElement::Rule(rule) => {
                let (r, g, b) = rule.color.to_unit();
                content.set_fill_rgb(r, g, b);
                content.rect(
                    page.padding + rule.x,
                    to_pdf_y(rule.y + rule.thickness),
                    rule.width,
                    rule.thickness,
                );
                content.fill_nonzero();
            }
        }
    }

    let content = content.finish();
    debug!(
        pixel_width,
        pixel_height,
        text_runs = layout.text_runs().count(),
        stream_bytes = content.len(),
        "Rasterized document snapshot"
    );

    Ok(Snapshot {
        css_width,
        css_height,
        pixel_width,
        pixel_height,
        scale,
        fonts: layout.template.base_fonts(),
        content,
    })
}

/// Encodes text for the standard fonts' WinAnsiEncoding. Characters without a
/// WinAnsi code point become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::build_document;
    use crate::layout::measure::layout_document;
    use crate::models::upstream::ResumeSource;
    use crate::render::templates::Template;

    fn placeholder_layout(template: Template) -> DocumentLayout {
        layout_document(
            &build_document(&ResumeSource::default()),
            template,
            &PageGeometry::a4(),
        )
    }

    #[test]
    fn test_snapshot_dimensions_follow_scale() {
        let page = PageGeometry::a4();
        let layout = placeholder_layout(Template::Modern);
        let snapshot = draw_snapshot(&layout, &page, 2.0).unwrap();
        assert_eq!(snapshot.pixel_width, 1588);
        assert_eq!(
            snapshot.pixel_height,
            ((layout.content_height + 100.0) * 2.0).round() as u32
        );
        assert!(!snapshot.content.is_empty());
    }

    #[test]
    fn test_snapshot_uses_template_fonts() {
        let page = PageGeometry::a4();
        let snapshot = draw_snapshot(&placeholder_layout(Template::Classic), &page, 1.0).unwrap();
        assert_eq!(snapshot.fonts, Template::Classic.base_fonts());
    }

    #[test]
    fn test_invalid_scale_is_rejected() {
        let page = PageGeometry::a4();
        let layout = placeholder_layout(Template::Modern);
        assert!(matches!(
            draw_snapshot(&layout, &page, 0.0),
            Err(ExportError::Rasterize(_))
        ));
        assert!(draw_snapshot(&layout, &page, f32::NAN).is_err());
    }

    #[test]
    fn test_zero_width_container_is_empty_snapshot() {
        let page = PageGeometry {
            width: 0.0,
            height: 1123.0,
            padding: 0.0,
        };
        let layout = placeholder_layout(Template::Modern);
        assert!(matches!(
            draw_snapshot(&layout, &page, 2.0),
            Err(ExportError::EmptySnapshot { width: 0, .. })
        ));
    }

    #[test]
    fn test_height_at_width_keeps_aspect_ratio() {
        let page = PageGeometry::a4();
        let snapshot = draw_snapshot(&placeholder_layout(Template::Modern), &page, 2.0).unwrap();
        let expected = snapshot.pixel_height as f32 * 210.0 / snapshot.pixel_width as f32;
        assert!((snapshot.height_at_width(210.0) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Abc 1"), b"Abc 1".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(encode_win_ansi("• —"), vec![0x95, b' ', 0x97]);
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }

    #[tokio::test]
    async fn test_vector_rasterizer_runs_off_thread() {
        let layout = placeholder_layout(Template::Professional);
        let snapshot = VectorRasterizer
            .rasterize(layout, PageGeometry::a4(), 2.0)
            .await
            .unwrap();
        assert_eq!(snapshot.scale, 2.0);
    }
}
