// Export Pipeline: full layout → snapshot (rasterization) → multi-page PDF.
// Each export owns its layout and snapshot; concurrent exports share no buffers.

pub mod handlers;
pub mod pdf;
pub mod pipeline;
pub mod rasterizer;

use thiserror::Error;

pub use pipeline::export_document;
pub use rasterizer::{Rasterizer, VectorRasterizer};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    #[error("Snapshot has no drawable area ({width}x{height} px)")]
    EmptySnapshot { width: u32, height: u32 },

    #[error("Document needs {pages} pages, limit is {limit}")]
    TooManyPages { pages: usize, limit: usize },

    #[error("PDF assembly failed: {0}")]
    Assembly(String),

    #[error("Export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
