//! Axum route handlers for the Preview API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::upstream::ResumeSource;
use crate::preview::{build_preview, Preview};
use crate::render::templates::{Template, TemplateInfo};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub template: Option<String>,
    pub page: Option<i64>,
}

/// POST /api/v1/preview
///
/// Builds the document from upstream JSON (placeholders for anything missing)
/// and returns paginated preview markup plus page descriptors.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewQuery>,
    Json(body): Json<Value>,
) -> Result<Json<Preview>, AppError> {
    let template = Template::resolve(params.template.as_deref(), state.config.default_template);
    let page = state.page;
    let scale = state.config.raster_scale;
    let requested_page = params.page;

    let preview = tokio::task::spawn_blocking(move || {
        let source = ResumeSource::from_value(&body);
        build_preview(&source, template, &page, scale, requested_page)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in preview: {e}")))?;

    debug!(
        %template,
        pages = preview.page_count,
        export_pages = preview.export_page_count,
        current = preview.current_page,
        "Built preview"
    );
    Ok(Json(preview))
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(Template::ALL.iter().map(|t| t.info()).collect())
}
