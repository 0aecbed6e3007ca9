use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use once_cell::sync::Lazy;
use std::sync::Arc;

use contracts::usecases::u101_import_bl::progress::CommitProgress;
use contracts::usecases::u101_import_bl::request::{CommitRequest, PreviewRequest};
use contracts::usecases::u101_import_bl::response::{BatchPreview, CommitResponse};
use serde_json::json;

use super::REMOTE_STORE;
use crate::shared::import::{build_batch, template};
use crate::usecases::u101_import_bl::{CommitTracker, ImportExecutor};

static IMPORT_EXECUTOR: Lazy<Arc<ImportExecutor>> = Lazy::new(|| {
    Arc::new(ImportExecutor::new(
        REMOTE_STORE.clone(),
        CommitTracker::new(),
    ))
});

/// POST /api/import/bl/preview
///
/// Чистый разбор без сети: показывается пользователю перед
/// подтверждением, ничего не коммитит
pub async fn preview(Json(request): Json<PreviewRequest>) -> Json<BatchPreview> {
    let batch = build_batch(&request.rows);
    Json(BatchPreview::from_batch(&batch))
}

/// POST /api/import/bl/commit
///
/// Батч пересобирается на сервере из сырых строк: preview носит
/// справочный характер
pub async fn start_commit(Json(request): Json<CommitRequest>) -> Json<CommitResponse> {
    let batch = build_batch(&request.rows);
    Json(IMPORT_EXECUTOR.start_commit(batch).await)
}

/// GET /api/import/bl/commit/:session_id
pub async fn get_progress(
    Path(session_id): Path<String>,
) -> Result<Json<CommitProgress>, StatusCode> {
    match IMPORT_EXECUTOR.get_progress(&session_id) {
        Some(progress) => Ok(Json(progress)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/import/bl/commit/:session_id/cancel
pub async fn cancel(
    Path(session_id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if IMPORT_EXECUTOR.request_cancel(&session_id) {
        Ok(Json(json!({ "cancelled": true })))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// GET /api/import/bl/template
pub async fn download_template() -> Result<impl IntoResponse, StatusCode> {
    let bytes = template::sample_template_csv().map_err(|e| {
        tracing::error!("Template generation failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    template::TEMPLATE_FILE_NAME
                ),
            ),
        ],
        bytes,
    ))
}
