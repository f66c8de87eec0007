//! Export orchestration. Steps run sequentially; a failure at any step aborts
//! the export with no partial output.

use tracing::info;
use uuid::Uuid;

use crate::document::model::ResumeDocument;
use crate::export::pdf::assemble_pdf;
use crate::export::rasterizer::Rasterizer;
use crate::export::ExportError;
use crate::layout::measure::layout_document;
use crate::layout::page::PageGeometry;
use crate::render::templates::Template;

#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub export_id: Uuid,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub filename: String,
}

/// Renders `doc` to a multi-page PDF.
///
/// 1. lay out the full document in a fixed-width container
/// 2. rasterize the container at `scale`
/// 3. scale the snapshot to the page width and slice it across pages
pub async fn export_document(
    doc: &ResumeDocument,
    template: Template,
    page: PageGeometry,
    rasterizer: &dyn Rasterizer,
    scale: f32,
    filename: &str,
) -> Result<ExportedPdf, ExportError> {
    let export_id = Uuid::new_v4();
    info!(%export_id, %template, "Starting PDF export");

    let owned = doc.clone();
    let layout =
        tokio::task::spawn_blocking(move || layout_document(&owned, template, &page)).await?;
    let content_height = layout.content_height;

    let snapshot = rasterizer.rasterize(layout, page, scale).await?;

    let title = format!("{} - Resume", doc.personal_info.name);
    let (bytes, page_count) =
        tokio::task::spawn_blocking(move || assemble_pdf(&snapshot, &title)).await??;

    info!(
        %export_id,
        page_count,
        content_height,
        bytes = bytes.len(),
        "PDF export complete"
    );

    Ok(ExportedPdf {
        export_id,
        bytes,
        page_count,
        filename: filename.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::document::build_document;
    use crate::document::model::ExperienceItem;
    use crate::export::rasterizer::{draw_snapshot, Snapshot, VectorRasterizer};
    use crate::export::ExportError;
    use crate::layout::measure::DocumentLayout;
    use crate::layout::page::{A4_HEIGHT_MM, A4_WIDTH_MM};
    use crate::models::upstream::{PersonalDetails, ResumeSource};

    struct FailingRasterizer;

    #[async_trait]
    impl Rasterizer for FailingRasterizer {
        async fn rasterize(
            &self,
            _layout: DocumentLayout,
            _page: PageGeometry,
            _scale: f32,
        ) -> Result<Snapshot, ExportError> {
            Err(ExportError::Rasterize("canvas unavailable".to_string()))
        }
    }

    /// Draws the layout as if it exactly filled one preview page.
    struct FullPageRasterizer;

    #[async_trait]
    impl Rasterizer for FullPageRasterizer {
        async fn rasterize(
            &self,
            mut layout: DocumentLayout,
            page: PageGeometry,
            scale: f32,
        ) -> Result<Snapshot, ExportError> {
            layout.content_height = page.content_height();
            draw_snapshot(&layout, &page, scale)
        }
    }

    fn named_doc(name: &str) -> ResumeDocument {
        build_document(&ResumeSource {
            personal_details: Some(PersonalDetails {
                name: Some(name.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    fn long_doc(jobs: usize) -> ResumeDocument {
        let mut doc = named_doc("Jane Doe");
        doc.experience = (0..jobs)
            .map(|i| ExperienceItem {
                title: format!("Engineer {i}"),
                company: "Acme".to_string(),
                location: None,
                period: Some("2015 - 2018".to_string()),
                highlights: vec![
                    "Owned the incident response rotation and cut mean time to recovery \
                     from four hours to twenty minutes over two quarters"
                        .to_string();
                    5
                ],
            })
            .collect();
        doc
    }

    #[tokio::test]
    async fn test_export_placeholder_is_one_page() {
        let doc = build_document(&ResumeSource::default());
        let pdf = export_document(
            &doc,
            Template::Modern,
            PageGeometry::a4(),
            &VectorRasterizer,
            2.0,
            "resume.pdf",
        )
        .await
        .unwrap();
        assert!(pdf.bytes.starts_with(b"%PDF-"));
        assert_eq!(pdf.page_count, 1);
        assert_eq!(pdf.filename, "resume.pdf");
    }

    #[tokio::test]
    async fn test_export_tall_document_page_count_matches_image_height() {
        let page = PageGeometry::a4();
        let doc = long_doc(12);
        let layout = layout_document(&doc, Template::Modern, &page);
        let container_height = layout.content_height + 2.0 * page.padding;
        // Same rounding the snapshot applies at scale 2.
        let pixel_w = (page.width * 2.0).round();
        let pixel_h = (container_height * 2.0).round();
        let image_mm = pixel_h * A4_WIDTH_MM / pixel_w;
        let pages = (image_mm / A4_HEIGHT_MM).ceil() as usize;
        // A last band no taller than one snapshot pixel is not a page.
        let remainder = image_mm - (pages - 1) as f32 * A4_HEIGHT_MM;
        let expected = if remainder <= A4_WIDTH_MM / pixel_w {
            pages - 1
        } else {
            pages
        };
        assert!(expected > 1, "fixture should span several pages");

        let pdf = export_document(&doc, Template::Modern, page, &VectorRasterizer, 2.0, "resume.pdf")
            .await
            .unwrap();
        assert_eq!(pdf.page_count, expected);
    }

    #[tokio::test]
    async fn test_export_of_exactly_one_full_page_is_one_page() {
        let doc = named_doc("Jane Doe");
        for scale in [1.0_f32, 2.0, 3.0] {
            let pdf = export_document(
                &doc,
                Template::Modern,
                PageGeometry::a4(),
                &FullPageRasterizer,
                scale,
                "resume.pdf",
            )
            .await
            .unwrap();
            assert_eq!(pdf.page_count, 1, "scale = {scale}");
        }
    }

    #[tokio::test]
    async fn test_exported_pdf_carries_name_and_parses() {
        let doc = named_doc("Jane Doe");
        let pdf = export_document(
            &doc,
            Template::Classic,
            PageGeometry::a4(),
            &VectorRasterizer,
            2.0,
            "resume.pdf",
        )
        .await
        .unwrap();
        // Content streams are written uncompressed.
        let raw = String::from_utf8_lossy(&pdf.bytes);
        assert!(raw.contains("(Jane Doe) Tj"));
        assert!(pdf_extract::extract_text_from_mem(&pdf.bytes).is_ok());
    }

    #[tokio::test]
    async fn test_rasterizer_failure_aborts_export() {
        let doc = named_doc("Jane Doe");
        let result = export_document(
            &doc,
            Template::Modern,
            PageGeometry::a4(),
            &FailingRasterizer,
            2.0,
            "resume.pdf",
        )
        .await;
        assert!(matches!(result, Err(ExportError::Rasterize(_))));
    }

    #[tokio::test]
    async fn test_concurrent_exports_are_independent() {
        let short = named_doc("Short Person");
        let long = long_doc(12);
        let page = PageGeometry::a4();

        let (a, b) = tokio::join!(
            export_document(&short, Template::Modern, page, &VectorRasterizer, 2.0, "resume.pdf"),
            export_document(&long, Template::Modern, page, &VectorRasterizer, 2.0, "resume.pdf"),
        );
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_eq!(a.page_count, 1);
        assert!(b.page_count > 1);
        assert_ne!(a.export_id, b.export_id);
    }
}
