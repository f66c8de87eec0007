//! Preview: document → markup → paginated page containers.
//!
//! The preview is stateless. The client sends the page it wants shown; the
//! navigator opens on page 1 and moves there only if the request is in range.
//!
//! Preview pages are windows of the content box (page padding excluded),
//! while the PDF export slices the padded container across whole A4 sheets.
//! The two counts can differ, so the preview reports both.

pub mod handlers;

use serde::Serialize;

use crate::document::{build_document, ResumeDocument};
use crate::export::pdf::sliced_page_count;
use crate::export::rasterizer::{container_size, pixel_size};
use crate::layout::{layout_document, paginate, PageDescriptor, PageGeometry, PageNavigator};
use crate::models::upstream::ResumeSource;
use crate::render::{render_document_html, render_paginated_html, Template};

#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub document: ResumeDocument,
    pub template: Template,
    /// Unpaginated markup, for clients that measure or print it themselves.
    pub document_html: String,
    /// Page containers; only `current_page` is displayed.
    pub html: String,
    pub content_height: f32,
    pub page_height: f32,
    pub page_count: u32,
    /// Pages the PDF export of this document will have.
    pub export_page_count: usize,
    pub current_page: u32,
    pub pages: Vec<PageDescriptor>,
}

pub fn build_preview(
    source: &ResumeSource,
    template: Template,
    page: &PageGeometry,
    scale: f32,
    requested_page: Option<i64>,
) -> Preview {
    let document = build_document(source);
    let layout = layout_document(&document, template, page);
    let pages = paginate(layout.content_height, page.content_height());

    let (css_width, css_height) = container_size(layout.content_height, page);
    let (pixel_width, pixel_height) = pixel_size(css_width, css_height, scale);
    let export_page_count = sliced_page_count(pixel_width, pixel_height);

    let mut navigator = PageNavigator::open(pages.len() as u32);
    if let Some(k) = requested_page {
        navigator.go_to(k);
    }

    let html = render_paginated_html(&document, template, page, &pages, &navigator);
    let document_html = render_document_html(&document, template, page);

    Preview {
        template,
        document_html,
        html,
        content_height: layout.content_height,
        page_height: page.content_height(),
        page_count: navigator.total(),
        export_page_count,
        current_page: navigator.current(),
        pages,
        document,
    }
}
