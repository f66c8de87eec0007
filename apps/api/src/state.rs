use std::sync::Arc;

use crate::config::Config;
use crate::export::Rasterizer;
use crate::layout::PageGeometry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable rasterizer. Default: VectorRasterizer.
    pub rasterizer: Arc<dyn Rasterizer>,
    /// Preview page geometry; A4 at 96 px/in.
    pub page: PageGeometry,
}
