use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::common::UseCaseError;
use serde::Deserialize;
use serde_json::json;

use contracts::domain::a001_bill_of_lading::aggregate::BillOfLading;

use super::REMOTE_STORE;
use crate::domain::a001_bill_of_lading::service;
use crate::shared::data::local_cache;

type HandlerError = (StatusCode, Json<UseCaseError>);

fn bad_request(error: UseCaseError) -> HandlerError {
    (StatusCode::BAD_REQUEST, Json(error))
}

fn internal(error: UseCaseError) -> HandlerError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error))
}

/// GET /api/bill_of_lading
///
/// Рабочий набор страницы: удалённое хранилище + локальный кэш,
/// недоступность источников деградирует, ошибки наружу не выходят
pub async fn list_working_set() -> Json<Vec<BillOfLading>> {
    Json(service::load_working_set(REMOTE_STORE.as_ref()).await)
}

/// POST /api/bill_of_lading/refresh
///
/// Явное перестроение рабочего набора (набор всегда строится заново,
/// на месте ничего не мутируется)
pub async fn refresh_working_set() -> Json<Vec<BillOfLading>> {
    Json(service::load_working_set(REMOTE_STORE.as_ref()).await)
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub ids: Vec<String>,
}

/// POST /api/bill_of_lading/delete
pub async fn delete(
    Json(request): Json<DeleteRequest>,
) -> Result<Json<serde_json::Value>, HandlerError> {
    let mut ids = Vec::with_capacity(request.ids.len());
    for raw in &request.ids {
        match uuid::Uuid::parse_str(raw) {
            Ok(id) => ids.push(id),
            Err(_) => {
                return Err(bad_request(
                    UseCaseError::validation("Invalid document id").with_details(raw.clone()),
                ))
            }
        }
    }

    match service::delete_by_ids(REMOTE_STORE.as_ref(), &ids).await {
        Ok(()) => Ok(Json(json!({ "deleted": ids.len() }))),
        Err(e) => {
            tracing::error!("Delete failed: {}", e);
            Err(internal(UseCaseError::external(e.to_string())))
        }
    }
}

/// POST /api/bill_of_lading/cache/clear
///
/// Локальный кэш живёт до явной очистки
pub async fn clear_cache() -> Result<Json<serde_json::Value>, HandlerError> {
    match local_cache::clear().await {
        Ok(removed) => Ok(Json(json!({ "removed": removed }))),
        Err(e) => {
            tracing::error!("Cache clear failed: {}", e);
            Err(internal(UseCaseError::from(e)))
        }
    }
}
