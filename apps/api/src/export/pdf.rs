//! PDF assembly: slices one tall snapshot across A4 pages.
//!
//! The snapshot is scaled to the page width. Page 1 places it at vertical
//! position 0; every further page places the same snapshot `page_height`
//! higher (`position -= page_height`) until the remaining height is covered,
//! so each page shows the next band. The page's media box clips the rest.

use chrono::{Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, TextStr};
use tracing::debug;

use crate::export::rasterizer::{Snapshot, BOLD_FONT, REGULAR_FONT};
use crate::export::ExportError;
use crate::layout::page::{mm_to_pt, A4_HEIGHT_MM, A4_WIDTH_MM};

/// Upper bound on exported pages.
pub const MAX_PAGES: usize = 100;


const SNAPSHOT_XOBJECT: Name<'static> = Name(b"Snap");

/// Vertical positions (mm from the page top, y down) at which the snapshot is
/// placed on each successive page. Always at least one entry.
///
/// A remainder no taller than `tolerance` does not start a new page. Pass the
/// height of one snapshot pixel so that rounding the page to whole CSS pixels
/// cannot spill a sliver onto an extra page.
pub fn slice_positions(image_height: f32, page_height: f32, tolerance: f32) -> Vec<f32> {
    let mut positions = vec![0.0_f32];
    if !page_height.is_finite() || page_height <= 0.0 || !image_height.is_finite() {
        return positions;
    }
    let tolerance = if tolerance.is_finite() { tolerance.max(0.0) } else { 0.0 };

    let mut position = 0.0_f32;
    let mut height_left = image_height - page_height;
    while height_left > tolerance {
        position -= page_height;
        positions.push(position);
        height_left -= page_height;
    }
    positions
}

/// Height in mm of one snapshot pixel once the snapshot is scaled to the page width.
fn pixel_size_mm(pixel_width: u32) -> f32 {
    A4_WIDTH_MM / pixel_width.max(1) as f32
}

/// Number of PDF pages a snapshot of this pixel size slices into.
pub fn sliced_page_count(pixel_width: u32, pixel_height: u32) -> usize {
    if pixel_width == 0 {
        return 1;
    }
    let image_height_mm = pixel_height as f32 * A4_WIDTH_MM / pixel_width as f32;
    slice_positions(image_height_mm, A4_HEIGHT_MM, pixel_size_mm(pixel_width)).len()
}

/// Builds the PDF. Returns the file bytes and the page count.
pub fn assemble_pdf(snapshot: &Snapshot, title: &str) -> Result<(Vec<u8>, usize), ExportError> {
    if snapshot.pixel_width == 0 || snapshot.pixel_height == 0 {
        return Err(ExportError::EmptySnapshot {
            width: snapshot.pixel_width,
            height: snapshot.pixel_height,
        });
    }

    let image_width_mm = A4_WIDTH_MM;
    let image_height_mm = snapshot.height_at_width(image_width_mm);
    let positions = slice_positions(
        image_height_mm,
        A4_HEIGHT_MM,
        pixel_size_mm(snapshot.pixel_width),
    );
    if positions.len() > MAX_PAGES {
        return Err(ExportError::TooManyPages {
            pages: positions.len(),
            limit: MAX_PAGES,
        });
    }

    let page_width_pt = mm_to_pt(A4_WIDTH_MM);
    let page_height_pt = mm_to_pt(A4_HEIGHT_MM);
    let image_height_pt = mm_to_pt(image_height_mm);
    let scale_x = page_width_pt / snapshot.css_width;
    let scale_y = image_height_pt / snapshot.css_height;
    if !scale_x.is_finite() || !scale_y.is_finite() {
        return Err(ExportError::Assembly(format!(
            "cannot scale a {}x{} px snapshot onto the page",
            snapshot.css_width, snapshot.css_height
        )));
    }

    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };
    let catalog_id = alloc();
    let page_tree_id = alloc();
    let regular_font_id = alloc();
    let bold_font_id = alloc();
    let snapshot_id = alloc();
    let info_id = alloc();
    let page_ids: Vec<(Ref, Ref)> = positions.iter().map(|_| (alloc(), alloc())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);

    pdf.type1_font(regular_font_id)
        .base_font(Name(snapshot.fonts.regular.as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_font_id)
        .base_font(Name(snapshot.fonts.bold.as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    {
        let mut form = pdf.form_xobject(snapshot_id, &snapshot.content);
        form.bbox(Rect::new(0.0, 0.0, snapshot.css_width, snapshot.css_height));
        let mut resources = form.resources();
        resources
            .fonts()
            .pair(REGULAR_FONT, regular_font_id)
            .pair(BOLD_FONT, bold_font_id);
        resources.finish();
        form.finish();
    }

    for ((page_id, content_id), position_mm) in page_ids.iter().zip(&positions) {
        // Top of the snapshot sits `position` below the page top; PDF places
        // the form by its bottom-left corner.
        let bottom_pt = page_height_pt - (mm_to_pt(*position_mm) + image_height_pt);

        let mut content = Content::new();
        content.save_state();
        content.transform([scale_x, 0.0, 0.0, scale_y, 0.0, bottom_pt]);
        content.x_object(SNAPSHOT_XOBJECT);
        content.restore_state();
        pdf.stream(*content_id, &content.finish());

        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, page_width_pt, page_height_pt))
            .parent(page_tree_id)
            .contents(*content_id);
        page.resources()
            .x_objects()
            .pair(SNAPSHOT_XOBJECT, snapshot_id);
        page.finish();
    }

    let now = Utc::now();
    pdf.document_info(info_id)
        .title(TextStr(title))
        .creator(TextStr("Folio"))
        .creation_date(
            Date::new(now.year() as u16)
                .month(now.month() as u8)
                .day(now.day() as u8)
                .hour(now.hour() as u8)
                .minute(now.minute() as u8)
                .second(now.second() as u8),
        );

    let page_count = positions.len();
    let bytes = pdf.finish();
    debug!(
        page_count,
        image_height_mm,
        scale = snapshot.scale,
        bytes = bytes.len(),
        "Assembled PDF"
    );
    Ok((bytes, page_count))
}
