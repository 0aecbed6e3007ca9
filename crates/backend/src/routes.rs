use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // U101: импорт коносаментов из файла
        // ========================================
        .route(
            "/api/import/bl/preview",
            post(handlers::u101_import_bl::preview),
        )
        .route(
            "/api/import/bl/commit",
            post(handlers::u101_import_bl::start_commit),
        )
        .route(
            "/api/import/bl/commit/:session_id",
            get(handlers::u101_import_bl::get_progress),
        )
        .route(
            "/api/import/bl/commit/:session_id/cancel",
            post(handlers::u101_import_bl::cancel),
        )
        .route(
            "/api/import/bl/template",
            get(handlers::u101_import_bl::download_template),
        )
        // ========================================
        // A001: рабочий набор коносаментов
        // ========================================
        .route(
            "/api/bill_of_lading",
            get(handlers::a001_bill_of_lading::list_working_set),
        )
        .route(
            "/api/bill_of_lading/refresh",
            post(handlers::a001_bill_of_lading::refresh_working_set),
        )
        .route(
            "/api/bill_of_lading/delete",
            post(handlers::a001_bill_of_lading::delete),
        )
        .route(
            "/api/bill_of_lading/cache/clear",
            post(handlers::a001_bill_of_lading::clear_cache),
        )
}
