//! Axum route handlers for the Export API.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;

use crate::document::build_document;
use crate::errors::AppError;
use crate::export::export_document;
use crate::models::upstream::ResumeSource;
use crate::render::templates::Template;
use crate::state::AppState;

pub const PAGE_COUNT_HEADER: &str = "x-page-count";
pub const EXPORT_ID_HEADER: &str = "x-export-id";

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub template: Option<String>,
}

/// POST /api/v1/export
///
/// Renders the full document to a PDF and returns it as a download with the
/// configured fixed filename. Failures come back as a JSON error body.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let template = Template::resolve(params.template.as_deref(), state.config.default_template);
    let document = build_document(&ResumeSource::from_value(&body));

    let pdf = export_document(
        &document,
        template,
        state.page,
        state.rasterizer.as_ref(),
        state.config.raster_scale,
        &state.config.export_filename,
    )
    .await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", pdf.filename))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid export filename: {e}")))?,
    );
    headers.insert(PAGE_COUNT_HEADER, HeaderValue::from(pdf.page_count as u64));
    headers.insert(
        EXPORT_ID_HEADER,
        HeaderValue::from_str(&pdf.export_id.to_string())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid export id header: {e}")))?,
    );

    Ok((headers, Bytes::from(pdf.bytes)))
}
