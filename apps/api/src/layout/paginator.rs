//! Paginator: splits a measured content height into fixed-height pages.
//!
//! Pages are windows onto one continuous render, not re-flowed content: page
//! `i` shows the slice starting at `(i - 1) * page_height`. A line that
//! straddles a window edge is cut in two, exactly as in the on-screen preview.

use serde::{Deserialize, Serialize};

/// One visual page: 1-based index and how far the content is shifted up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub index: u32,
    pub vertical_offset: f32,
}

/// `ceil(content_height / page_height)`, never less than 1.
///
/// Negative or non-finite heights count as empty content; a non-positive page
/// height cannot be windowed and yields a single page.
pub fn page_count(content_height: f32, page_height: f32) -> u32 {
    if !page_height.is_finite() || page_height <= 0.0 {
        return 1;
    }
    let height = if content_height.is_finite() {
        content_height.max(0.0)
    } else {
        0.0
    };
    ((height / page_height).ceil() as u32).max(1)
}

/// Page descriptors with offsets `0, C, 2C, ...`.
pub fn paginate(content_height: f32, page_height: f32) -> Vec<PageDescriptor> {
    let count = page_count(content_height, page_height);
    let step = if page_height.is_finite() && page_height > 0.0 {
        page_height
    } else {
        0.0
    };
    (0..count)
        .map(|i| PageDescriptor {
            index: i + 1,
            vertical_offset: i as f32 * step,
        })
        .collect()
}
